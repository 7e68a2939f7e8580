mod load;
mod types;

pub use load::{
    apply_env_overrides, default_config_toml, get_sitescan_data_dir, load_default, load_from_path,
    CONFIG_FILE_NAME, LOCAL_CONFIG_FILE_NAME,
};
pub use types::{
    AppConfig, LoggingConfig, ScanConfig, DEFAULT_URL_COLUMN, DEFAULT_USER_AGENT, MAX_CONCURRENCY,
};
