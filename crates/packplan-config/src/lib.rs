//! Build plan resolution for the Packplan pipeline.
//!
//! This crate turns an environment mapping into an immutable [`BuildSettings`]
//! record and assembles a declarative [`BuildPlan`] from it. The plan names
//! external asset processors and plugins; it never runs them. All file I/O and
//! actual bundling happen in downstream collaborators that consume the plan.

pub mod error;
pub mod plan;
pub mod settings;

// Re-export main types
pub use error::{ConfigError, Result};
pub use plan::{
    AssetRule, BuildPlan, DevServerOptions, OutputOptions, PluginInvocation, ProcessorRef,
    ResolveOptions,
};
pub use settings::{BuildSettings, Mode, SourceMapMode, APP_ENV, CLEAN_FOLDERS};
