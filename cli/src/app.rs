//! Command dispatch: `init` runs before any config is loaded, everything
//! else loads the config, sets up tracing and scans.
use sitescan_core::api as core_api;

use crate::commands::cli::{Args, Commands, ScanArgs};
use crate::commands::{init, scan};
use crate::error::CliError;
use crate::logging::init_tracing;

pub async fn run_app(args: Args) -> Result<i32, CliError> {
    let scan_args = match args.command {
        // `init` writes a fresh config, so a broken existing one must not block it.
        Some(Commands::Init(init_args)) => {
            init_tracing(&core_api::LoggingConfig::default()).map_err(CliError::Logging)?;
            init::handle_init(init_args)?;
            return Ok(0);
        }
        Some(Commands::Scan(scan_args)) => scan_args,
        None => ScanArgs::default(),
    };

    let cfg = core_api::load_default(args.config.as_deref())?;
    init_tracing(&cfg.logging).map_err(CliError::Logging)?;
    scan::handle_scan(scan_args, cfg).await?;
    Ok(0)
}
