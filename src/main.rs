use clap::Parser;
use tracing_subscriber::EnvFilter;

use gqldocs::cli::{self, Args};
use gqldocs::status::ExitStatus;

/// Entry point - parses arguments, sets up logging and runs the docs engine.
///
/// Returns ExitStatus directly, which implements std::process::Termination.
#[tokio::main]
async fn main() -> ExitStatus {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("gqldocs=debug"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli::run(args).await {
        Ok(status) => status,
        Err(e) => {
            eprintln!("gqldocs: error: {}", e);
            ExitStatus::Error
        }
    }
}
