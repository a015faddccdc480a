use std::io::{self, Write};
use std::process;

use clap::Parser;
use search_tree::cli::{execute_command, Cli, CliError};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result =
        execute_command(&cli, &mut out).and_then(|()| out.flush().map_err(CliError::from));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}

/// Logs go to stderr. `RUST_LOG` wins over the `-d` count when set.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(verbosity, "logging initialised");
}
