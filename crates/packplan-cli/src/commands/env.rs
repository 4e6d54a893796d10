//! Env command implementation.
//!
//! Prints the resolved settings alone, for checking how APP_ENV and
//! CLEAN_FOLDERS are being interpreted.

use packplan_config::BuildSettings;

use crate::error::Result;
use crate::ui;

/// Execute the env command.
pub fn execute() -> Result<()> {
    let env = super::process_env();
    let settings = BuildSettings::resolve(&env);

    ui::info(&format!("Mode: {}", settings.mode));

    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
