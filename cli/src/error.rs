use sitescan_core::api::{ConfigError, ScanError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error("command failed: {0:#}")]
    Command(#[from] anyhow::Error),
}

impl CliError {
    // 0: success
    // 11: config error
    // 20: input workbook could not be loaded
    // 30: report could not be written
    // 50: internal/uncategorized
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Logging(_) => 11,
            Self::Scan(e) => match e {
                ScanError::Config(_) => 11,
                ScanError::Input(_) => 20,
                ScanError::Output(_) => 30,
                ScanError::Client(_) => 50,
            },
            Self::Command(_) => 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitescan_core::api::WorkbookError;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let input = CliError::from(ScanError::Input(WorkbookError::NoWorksheet(
            PathBuf::from("a.xlsx"),
        )));
        assert_eq!(input.exit_code(), 20);

        let output = CliError::from(ScanError::Output(WorkbookError::DuplicatePosition(3)));
        assert_eq!(output.exit_code(), 30);

        let config = CliError::from(ConfigError::invalid("concurrency", "must be at least 1"));
        assert_eq!(config.exit_code(), 11);

        let nested = CliError::from(ScanError::from(ConfigError::invalid("input", "missing")));
        assert_eq!(nested.exit_code(), 11);

        assert_eq!(CliError::Command(anyhow::anyhow!("boom")).exit_code(), 50);
    }
}
