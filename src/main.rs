//! techo - Teto's echo
//!
//! usage: techo [-0~5|-q|-d|-l|-r|-f text-file] [--] [message ...]

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use techo::cli::Cli;
use techo::{terminal, Error};

/// Log filter variable; logging is off unless it is set.
const LOG_ENV: &str = "TECHO_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = terminal::install_interrupt_handler() {
        tracing::warn!("Failed to install Ctrl+C handler: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<Error>() {
            Some(Error::NarrowScreen { .. }) => {
                eprintln!("warning: too narrow screen");
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let columns = terminal::columns();
    let options = cli.into_options();
    tracing::debug!(?options, columns, "starting");

    let raw = options.source.read_with(io::stdin().lock())?;
    techo::draw(&options, &raw, columns, io::stdout().lock())?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
