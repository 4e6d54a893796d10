//! Command-line interface definition for Packplan.
//!
//! Defined with clap v4's derive macros. The binary is deliberately small:
//! `plan` emits the full build plan document, `env` emits just the resolved
//! settings for debugging environment wiring.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Packplan - resolve environment state into a declarative build plan
#[derive(Parser, Debug)]
#[command(
    name = "packplan",
    version,
    about = "Resolve environment state into a declarative build plan",
    long_about = "Packplan reads APP_ENV and CLEAN_FOLDERS from the environment,\n\
                  derives deterministic build settings, and prints a build plan\n\
                  document for the external bundling pipeline. It performs no\n\
                  bundling itself."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available Packplan subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve settings and print the assembled build plan
    ///
    /// The plan document goes to stdout; status lines go to stderr so the
    /// output can be piped straight into downstream tooling.
    Plan(PlanArgs),

    /// Print only the resolved build settings
    ///
    /// Useful for checking how APP_ENV and CLEAN_FOLDERS are being
    /// interpreted without the full plan document.
    Env,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Output format for the plan document
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    pub format: PlanFormat,

    /// Emit compact single-line JSON (ignored for TOML)
    #[arg(long)]
    pub compact: bool,
}

/// Serialization format for the emitted plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    Json,
    Toml,
}
