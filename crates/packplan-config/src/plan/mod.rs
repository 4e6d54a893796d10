//! Declarative build plan types shared across Packplan crates.

mod helpers;
mod plugins;
mod rules;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::settings::{BuildSettings, Mode, SourceMapMode};

pub use plugins::PluginInvocation;
pub use rules::{AssetRule, ProcessorRef};
pub use types::{DevServerOptions, OutputOptions, ResolveOptions};

use helpers::default_entries;
use plugins::{base_plugins, clean_plugin};
use rules::default_rules;

/// The full build plan handed to the external bundling pipeline.
///
/// Read-only after assembly; this crate never executes any part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub mode: Mode,

    /// Named entry points
    #[serde(default = "default_entries")]
    pub entries: IndexMap<String, String>,

    pub output: OutputOptions,

    pub source_maps: SourceMapMode,

    /// Settings for the external dev server collaborator
    #[serde(default)]
    pub dev_server: DevServerOptions,

    #[serde(default)]
    pub resolve: ResolveOptions,

    /// Ordered asset-processing rules
    pub rules: Vec<AssetRule>,

    /// Ordered plugin invocations
    pub plugins: Vec<PluginInvocation>,
}

impl BuildPlan {
    /// Assemble a plan from resolved settings.
    ///
    /// Pure: no I/O, no process state. The plugin list is built in a single
    /// expression; the cleanup plugin is included (last) only when
    /// `clean_before_build` is set.
    ///
    /// # Example
    ///
    /// ```
    /// use packplan_config::{BuildPlan, BuildSettings};
    ///
    /// let plan = BuildPlan::assemble(&BuildSettings::default());
    /// assert_eq!(plan.plugins.len(), 2);
    /// ```
    pub fn assemble(settings: &BuildSettings) -> Self {
        let plugins: Vec<PluginInvocation> = base_plugins()
            .into_iter()
            .chain(settings.clean_before_build.then(clean_plugin))
            .collect();

        tracing::debug!(
            mode = settings.mode.as_str(),
            plugins = plugins.len(),
            "assembled build plan"
        );

        Self {
            mode: settings.mode,
            entries: default_entries(),
            output: OutputOptions {
                dir: settings.output_dir.clone(),
                ..OutputOptions::default()
            },
            source_maps: settings.source_maps,
            dev_server: DevServerOptions::default(),
            resolve: ResolveOptions::default(),
            rules: default_rules(),
            plugins,
        }
    }

    /// Resolve the output directory against a base directory.
    ///
    /// Assembly keeps the two fixed candidates relative so it stays a pure
    /// function of the settings; callers that hand the document to a real
    /// pipeline anchor it here, typically with the working directory.
    ///
    /// # Example
    ///
    /// ```
    /// use packplan_config::{BuildPlan, BuildSettings};
    /// use std::path::PathBuf;
    ///
    /// let plan = BuildPlan::assemble(&BuildSettings::default()).with_base_dir("/srv/app");
    /// assert_eq!(plan.output.dir, PathBuf::from("/srv/app/dist"));
    /// ```
    pub fn with_base_dir(mut self, base: impl AsRef<std::path::Path>) -> Self {
        self.output.dir = base.as_ref().join(&self.output.dir);
        self
    }

    /// Create from serde_json::Value (for programmatic plans from tooling)
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}
