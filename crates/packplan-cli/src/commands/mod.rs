//! Command implementations for the Packplan CLI.

mod env;
mod plan;

pub use env::execute as env_execute;
pub use plan::execute as plan_execute;

use std::collections::HashMap;

/// Collect the environment into an explicit mapping.
///
/// Values from a `.env` file in the working directory (or an ancestor) are
/// loaded first, then the live process environment is layered on top, so
/// real environment variables always win. Resolution in `packplan-config`
/// never touches process globals; this is the single place the ambient
/// environment is read.
pub(crate) fn process_env() -> HashMap<String, String> {
    let mut env: HashMap<String, String> = dotenvy::dotenv_iter()
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.ok())
        .collect();
    env.extend(std::env::vars());
    env
}
