use clap::Parser;
use sitescan_cli::app::run_app;
use sitescan_cli::commands::cli;

#[tokio::main]
async fn main() {
    let exit = match run_app(cli::Args::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    };

    std::process::exit(exit);
}
