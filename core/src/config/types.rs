use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_URL_COLUMN: &str = "media_url";
/// Upper bound for `scan.concurrency`.
pub const MAX_CONCURRENCY: usize = 1024;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "sitescan_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Workbook holding the URL list.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Report path. Derived from `input` plus a timestamp when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Header (case-insensitive) of the column that holds the URLs.
    #[serde(default = "default_url_column")]
    pub url_column: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Pause held by a worker after each record before its slot is released.
    #[serde(default = "default_task_delay_ms")]
    pub task_delay_ms: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_progress")]
    pub progress: bool,
}

fn default_url_column() -> String {
    DEFAULT_URL_COLUMN.to_string()
}

fn default_concurrency() -> usize {
    5
}

fn default_task_delay_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_progress() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            url_column: default_url_column(),
            keywords: Vec::new(),
            concurrency: default_concurrency(),
            task_delay_ms: default_task_delay_ms(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            progress: default_progress(),
        }
    }
}

impl ScanConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn task_delay(&self) -> Duration {
        Duration::from_millis(self.task_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.input {
            None => return Err(ConfigError::invalid("input", "no input workbook given")),
            Some(p) if p.as_os_str().is_empty() => {
                return Err(ConfigError::invalid("input", "path is empty"))
            }
            Some(_) => {}
        }
        if self.url_column.trim().is_empty() {
            return Err(ConfigError::invalid("url_column", "must not be blank"));
        }
        if !self.keywords.iter().any(|k| !k.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "keywords",
                "at least one non-blank keyword is required",
            ));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::invalid("concurrency", "must be at least 1"));
        }
        if self.concurrency > MAX_CONCURRENCY {
            return Err(ConfigError::invalid(
                "concurrency",
                format!("must be at most {MAX_CONCURRENCY}"),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("timeout_secs", "must be at least 1"));
        }
        Ok(())
    }
}
