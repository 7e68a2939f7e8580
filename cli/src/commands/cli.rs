use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use sitescan_core::api::ScanConfig;

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "sitescan",
    version,
    about = "Scan a spreadsheet of websites for keywords"
)]
pub struct Args {
    /// Config file. Defaults to ~/.sitescan/config.toml, then ./sitescan.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Workbook with a `media_url` column.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Report workbook. Defaults to `<input>_result_<timestamp>.xlsx`.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Keyword to look for; repeat for several.
    #[arg(long = "keyword", short = 'k', action = clap::ArgAction::Append)]
    pub keywords: Vec<String>,

    #[arg(long)]
    pub url_column: Option<String>,

    /// Maximum number of sites fetched at once.
    #[arg(long)]
    pub concurrency: Option<usize>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Pause held by each worker after a site before it takes the next one.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(long)]
    pub no_progress: bool,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,
}

impl ScanArgs {
    /// Flags win over config file and environment.
    pub fn apply(&self, cfg: &mut ScanConfig) {
        if let Some(input) = &self.input {
            cfg.input = Some(input.clone());
        }
        if let Some(output) = &self.output {
            cfg.output = Some(output.clone());
        }
        if !self.keywords.is_empty() {
            cfg.keywords = self.keywords.clone();
        }
        if let Some(column) = &self.url_column {
            cfg.url_column = column.clone();
        }
        if let Some(n) = self.concurrency {
            cfg.concurrency = n;
        }
        if let Some(secs) = self.timeout_secs {
            cfg.timeout_secs = secs;
        }
        if let Some(ms) = self.delay_ms {
            cfg.task_delay_ms = ms;
        }
        if let Some(ua) = &self.user_agent {
            cfg.user_agent = ua.clone();
        }
        if self.no_progress {
            cfg.progress = false;
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct InitArgs {
    /// Where to write the config. Defaults to ~/.sitescan/config.toml.
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every site and write the report (default).
    Scan(ScanArgs),
    /// Write a starter config file.
    Init(InitArgs),
}
