//! Plan command implementation.
//!
//! Resolves settings from the process environment, assembles the build plan,
//! and prints it to stdout in the requested format.

use packplan_config::{BuildPlan, BuildSettings};

use crate::cli::{PlanArgs, PlanFormat};
use crate::error::Result;
use crate::ui;

/// Execute the plan command.
///
/// Status lines (selected mode, output directory, whether the clean plugin
/// was appended) go to stderr and never affect the emitted document.
pub fn execute(args: PlanArgs) -> Result<()> {
    let env = super::process_env();
    let settings = BuildSettings::resolve(&env);

    ui::info(&format!("Mode: {}", settings.mode));

    let plan = BuildPlan::assemble(&settings).with_base_dir(std::env::current_dir()?);

    ui::info(&format!("Output directory: {}", plan.output.dir.display()));

    if settings.clean_before_build {
        ui::success("Clean plugin appended to the plugin list");
    }

    tracing::debug!(format = ?args.format, compact = args.compact, "rendering plan");

    let rendered = match args.format {
        PlanFormat::Json if args.compact => serde_json::to_string(&plan)?,
        PlanFormat::Json => serde_json::to_string_pretty(&plan)?,
        PlanFormat::Toml => toml::to_string_pretty(&plan)?,
    };

    println!("{rendered}");
    Ok(())
}
