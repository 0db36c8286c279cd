//! Release Watch CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use release_watch::cli::{CheckCommand, Cli};
use release_watch::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Otherwise INFO, for this crate's targets only (`release_watch=info`)
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("release_watch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("release_watch=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Release Watch starting with args: {:?}", cli);

    let mut ui = create_ui(cli.output_mode(), cli.no_color);
    let result = CheckCommand::new(&cli).execute(ui.as_mut());

    ExitCode::from(result.exit_code as u8)
}
