use sitescan_core::api::{self as core_api, AppConfig};

use super::cli::{ReportFormat, ScanArgs};
use crate::error::CliError;

/// Run the pipeline and print the summary to stdout.
pub async fn handle_scan(args: ScanArgs, mut cfg: AppConfig) -> Result<(), CliError> {
    args.apply(&mut cfg.scan);
    tracing::debug!(
        target: "sitescan.cli",
        input = ?cfg.scan.input,
        keywords = cfg.scan.keywords.len(),
        concurrency = cfg.scan.concurrency,
        "starting scan"
    );
    let summary = core_api::run(&cfg.scan).await.map_err(|e| {
        tracing::error!(target: "sitescan.cli", "scan failed: {}", e);
        e
    })?;

    match args.report {
        ReportFormat::Text => println!("{summary}"),
        ReportFormat::Json => {
            let json = summary
                .to_json()
                .map_err(|e| CliError::Command(e.into()))?;
            println!("{json}");
        }
    }
    Ok(())
}
