//! Nodelint CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use nodelint::cli::{CheckCommand, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("nodelint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nodelint=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Nodelint starting with args: {:?}", cli);

    let command = CheckCommand::new(&cli.config_file, cli.quiet);
    let result = command.execute();

    ExitCode::from(result.exit_code as u8)
}
