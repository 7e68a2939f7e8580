#[allow(clippy::module_inception)]
pub mod error;
pub mod fetch;
pub mod workbook;

pub use error::{ConfigError, ScanError};
pub use fetch::{FetchError, FetchErrorKind};
pub use workbook::WorkbookError;
