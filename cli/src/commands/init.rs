//! Starter config writer
use std::path::{Path, PathBuf};

use anyhow::Context;
use sitescan_core::api as core_api;

use super::cli::InitArgs;
use crate::error::CliError;

/// Handle init command
pub fn handle_init(args: InitArgs) -> Result<PathBuf, CliError> {
    let config_path = match args.path {
        Some(p) => p,
        None => core_api::get_sitescan_data_dir()?.join("config.toml"),
    };

    if config_path.exists() && !args.force {
        tracing::debug!(
            target: "sitescan.cli",
            path = %config_path.display(),
            "config exists, not overwriting"
        );
        println!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        println!("Edit it directly, or run init again with --force to overwrite.");
        return Ok(config_path);
    }

    write_config(&config_path)?;
    tracing::info!(target: "sitescan.cli", path = %config_path.display(), "config written");

    println!("Configuration written to {}", config_path.display());
    println!("Set `scan.input` and `scan.keywords`, then run:");
    println!("  sitescan scan");
    Ok(config_path)
}

fn write_config(path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    std::fs::write(path, core_api::default_config_toml())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
