use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;

use crate::classify::KeywordClassifier;
use crate::config::ScanConfig;
use crate::error::{ConfigError, ScanError};
use crate::executor::{process, PoolOptions};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::report::RunSummary;
use crate::workbook::{default_output_path, export_report, load};

/// Load → process → export with the production HTTP fetcher.
pub async fn run(cfg: &ScanConfig) -> Result<RunSummary, ScanError> {
    let fetcher = HttpFetcher::from_config(cfg)?;
    run_with_fetcher(cfg, &fetcher).await
}

/// Same pipeline with an injected fetcher.
pub async fn run_with_fetcher<F>(cfg: &ScanConfig, fetcher: &F) -> Result<RunSummary, ScanError>
where
    F: PageFetcher + ?Sized,
{
    let started = Instant::now();
    cfg.validate()?;
    let input = input_path(cfg)?;

    let (sheet, mut records) = load(input, &cfg.url_column).map_err(ScanError::Input)?;
    tracing::info!(target: "sitescan.run", records = records.len(), "loaded website records");

    let classifier = KeywordClassifier::new(&cfg.keywords);
    let opts = PoolOptions::from_config(cfg);
    process(&mut records, fetcher, &classifier, &opts).await;

    let output = resolve_output(cfg, input);
    export_report(&sheet, &records, &output).map_err(ScanError::Output)?;

    let summary = RunSummary::tally(&records, output, started.elapsed());
    tracing::info!(
        target: "sitescan.run",
        matched = summary.matched,
        unmatched = summary.unmatched,
        errors = summary.errors,
        total = summary.total,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        output = %summary.output.display(),
        "run finished"
    );
    Ok(summary)
}

fn input_path(cfg: &ScanConfig) -> Result<&Path, ConfigError> {
    cfg.input
        .as_deref()
        .ok_or_else(|| ConfigError::invalid("input", "no input workbook given"))
}

fn resolve_output(cfg: &ScanConfig, input: &Path) -> PathBuf {
    cfg.output
        .clone()
        .unwrap_or_else(|| default_output_path(input, Local::now()))
}
