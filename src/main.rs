// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, parse arguments, run the command.
// - Logs go to stderr and default to `warn`; set `RUST_LOG=debug` to see
//   each request.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smartcurator_cli::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    cli.execute()
}
