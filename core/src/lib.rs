//! Keyword scanner for website lists kept in spreadsheets.
//!
//! Reads URLs from the first worksheet of a workbook, fetches every page
//! under a bounded worker pool, tests the markup for configured keywords and
//! writes a report workbook with `match_result` / `error_msg` columns.

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod executor;
pub mod fetch;
pub mod record;
pub mod report;
pub mod runner;
pub mod workbook;
