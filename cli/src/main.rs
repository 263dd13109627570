//! `taskpulse` entry point.
//!
//! Single-threaded by construction: a `current_thread` runtime and one
//! strictly sequential chain of API calls. Errors print a user-facing
//! message on stderr and the process exits non-zero.

use clap::Parser;
use taskpulse_cli::Cli;

fn main() {
    if let Err(err) = run_main() {
        eprintln!("taskpulse: {err:#}");
        std::process::exit(1);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn run_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Narration goes to stderr via tracing; the report itself owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    taskpulse_cli::run(cli).await
}
