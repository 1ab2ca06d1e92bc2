//! appenv CLI - inspect layered `.env` configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve keys through `<env>.env`, `.env`, and the process environment.
//! - Report which files a load would read.
//!
//! Does NOT handle:
//! - Loading logic itself (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout stays machine-readable.
//! - Failures exit with a structured code (see `error`).

mod args;
mod commands;
mod error;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn run(cli: Cli) -> Result<()> {
    let app_env = cli.app_env.as_deref();
    match cli.command {
        Commands::Resolve { keys } => commands::resolve::run(&cli.dir, app_env, &keys, cli.output),
        Commands::Files => commands::files::run(&cli.dir, app_env, cli.output),
    }
}
