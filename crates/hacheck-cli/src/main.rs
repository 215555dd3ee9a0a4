//! hacheck entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use hacheck_cli::{Args, EXIT_USAGE};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so the report on stdout stays parseable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();
    match hacheck_cli::run(args, &mut stdout).await {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            eprintln!("hacheck: {err:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}
