use std::path::PathBuf;

use thiserror::Error;

use super::workbook::WorkbookError;

/// Fatal errors: any of these terminates the run before output is saved.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to load input: {0}")]
    Input(#[source] WorkbookError),
    #[error("failed to export results: {0}")]
    Output(#[source] WorkbookError),
    #[error("http client error: {0}")]
    Client(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
