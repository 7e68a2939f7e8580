use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

use super::types::{AppConfig, DEFAULT_URL_COLUMN, DEFAULT_USER_AGENT};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "sitescan.toml";

/// Get the default sitescan data directory: ~/.sitescan
pub fn get_sitescan_data_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".sitescan"))
        .ok_or_else(|| ConfigError::invalid("home", "cannot determine home directory"))
}

pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the config file and apply `SITESCAN_*` environment overrides.
///
/// Lookup order: `explicit`, `~/.sitescan/config.toml`, `./sitescan.toml`,
/// built-in defaults. An explicit path that does not exist is an error.
pub fn load_default(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut cfg = match explicit {
        Some(path) => load_from_path(path)?,
        None => {
            let home_config = get_sitescan_data_dir()
                .ok()
                .map(|dir| dir.join(CONFIG_FILE_NAME))
                .filter(|p| p.exists());
            let local_config = Path::new(LOCAL_CONFIG_FILE_NAME);

            if let Some(path) = home_config {
                load_from_path(&path)?
            } else if local_config.exists() {
                load_from_path(local_config)?
            } else {
                AppConfig::default()
            }
        }
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

/// Environment overrides (Priority 0: highest besides CLI flags).
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("SITESCAN_INPUT") {
        cfg.scan.input = Some(PathBuf::from(v.trim()));
    }
    if let Some(v) = get("SITESCAN_OUTPUT") {
        cfg.scan.output = Some(PathBuf::from(v.trim()));
    }
    if let Some(v) = get("SITESCAN_KEYWORDS") {
        cfg.scan.keywords = v
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Some(v) = get("SITESCAN_CONCURRENCY") {
        cfg.scan.concurrency = parse_number("SITESCAN_CONCURRENCY", &v)?;
    }
    if let Some(v) = get("SITESCAN_TIMEOUT_SECS") {
        cfg.scan.timeout_secs = parse_number("SITESCAN_TIMEOUT_SECS", &v)?;
    }
    if let Some(v) = get("SITESCAN_DELAY_MS") {
        cfg.scan.task_delay_ms = parse_number("SITESCAN_DELAY_MS", &v)?;
    }
    Ok(())
}

fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::invalid(field, format!("'{}' is not a number", raw.trim())))
}

/// Commented starter config written by `sitescan init`.
pub fn default_config_toml() -> String {
    format!(
        r#"# sitescan configuration

[logging]
enabled = true
console = true
# Write a log file under `directory` (OS temp dir when unset).
file = false
level = "info"
# directory = "/var/log/sitescan"

[scan]
# input = "sites.xlsx"
# output = "sites_result.xlsx"
url_column = "{url_column}"
keywords = ["keyword1", "keyword2"]
concurrency = 5
# Held after every record before the worker slot is released.
task_delay_ms = 1000
timeout_secs = 30
user_agent = "{user_agent}"
progress = true
"#,
        url_column = DEFAULT_URL_COLUMN,
        user_agent = DEFAULT_USER_AGENT,
    )
}
