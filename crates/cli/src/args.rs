//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "appenv")]
#[command(
    about = "Inspect layered configuration: <env>.env, then .env, then the process environment",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  appenv resolve DATABASE_URL PORT\n  appenv --dir config --app-env test resolve DEBUG\n  appenv --output json files\n"
)]
pub struct Cli {
    /// Directory containing <env>.env and .env
    #[arg(short, long, global = true, env = "APPENV_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Environment name (defaults to $APP_ENV, then "production")
    #[arg(short = 'e', long, global = true)]
    pub app_env: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve keys through all three layers
    Resolve {
        /// Keys to look up
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Show the files that would be read and whether they exist
    Files,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
