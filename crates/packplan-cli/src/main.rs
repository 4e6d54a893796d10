//! Packplan CLI entry point.
//!
//! Parses arguments, initializes logging, and dispatches to the commands.

use clap::Parser;
use packplan_cli::{cli, commands, logger, ui};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(
        args.verbose,
        args.quiet,
        args.no_color || !ui::should_use_color(),
    );

    let result = match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args),
        cli::Command::Env => commands::env_execute(),
    };

    if let Err(err) = &result {
        ui::error(&err.to_string());
    }

    Ok(result?)
}
