//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `sitescan_core::api` instead of reaching into internal modules.

pub use crate::classify::{matches, KeywordClassifier};
pub use crate::config::{
    apply_env_overrides, default_config_toml, get_sitescan_data_dir, load_default,
    load_from_path, AppConfig, LoggingConfig, ScanConfig, LOCAL_CONFIG_FILE_NAME, MAX_CONCURRENCY,
};
pub use crate::error::{ConfigError, FetchError, FetchErrorKind, ScanError, WorkbookError};
pub use crate::executor::{process, PoolOptions, PoolStats};
pub use crate::fetch::{normalize_url, HttpFetcher, PageFetcher};
pub use crate::record::{MatchResult, Outcome, TaskRecord};
pub use crate::report::RunSummary;
pub use crate::runner::{run, run_with_fetcher};
pub use crate::workbook::{default_output_path, export_report, load_records};
