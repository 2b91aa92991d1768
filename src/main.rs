//! Binary entry point: install logging, parse arguments, and hand off to the
//! command runner. Fatal storage problems surface as an error exit.
use std::process::ExitCode;

use clap::Parser;
use library_book_finder::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    run(Cli::parse())
}
