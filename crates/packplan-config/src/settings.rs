//! Environment-derived build settings.
//!
//! [`BuildSettings::resolve`] is a pure function of the mapping it is given:
//! callers collect the process environment (or any other source) into a map
//! and inject it explicitly. Resolution is total — unknown or malformed keys
//! fall back to defaults and never abort.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable selecting the build mode.
pub const APP_ENV: &str = "APP_ENV";

/// Environment variable enabling output cleanup before the build.
pub const CLEAN_FOLDERS: &str = "CLEAN_FOLDERS";

/// Build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fast iteration builds with inline source maps
    Development,
    /// Optimized builds with separate source map files (default)
    #[default]
    Production,
}

/// Source map generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapMode {
    /// Source maps embedded in the emitted bundle
    Inline,
    /// External .map files next to the bundle
    #[default]
    SeparateFile,
}

impl Mode {
    /// Output directory paired with this mode.
    pub fn output_dir(self) -> PathBuf {
        match self {
            Mode::Development => PathBuf::from("build"),
            Mode::Production => PathBuf::from("dist"),
        }
    }

    /// Source map strategy paired with this mode.
    pub fn source_maps(self) -> SourceMapMode {
        match self {
            Mode::Development => SourceMapMode::Inline,
            Mode::Production => SourceMapMode::SeparateFile,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved build settings, computed once per invocation and never mutated.
///
/// `output_dir` and `source_maps` are derived from `mode`, so the three are
/// always mutually consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    pub mode: Mode,
    pub output_dir: PathBuf,
    pub source_maps: SourceMapMode,
    pub clean_before_build: bool,
}

impl BuildSettings {
    /// Resolve settings from an environment mapping.
    ///
    /// `APP_ENV` must be exactly `"development"` to select development mode;
    /// any other value, including absence, selects production. Cleanup is
    /// enabled only when `CLEAN_FOLDERS` is exactly `"true"`.
    ///
    /// # Example
    ///
    /// ```
    /// use packplan_config::{BuildSettings, Mode};
    /// use std::collections::HashMap;
    ///
    /// let settings = BuildSettings::resolve(&HashMap::new());
    /// assert_eq!(settings.mode, Mode::Production);
    /// ```
    pub fn resolve(env: &HashMap<String, String>) -> Self {
        let mode = match env.get(APP_ENV).map(String::as_str) {
            Some("development") => Mode::Development,
            _ => Mode::Production,
        };

        let clean_before_build = env.get(CLEAN_FOLDERS).map(String::as_str) == Some("true");

        tracing::debug!(mode = mode.as_str(), clean_before_build, "resolved build settings");

        Self {
            mode,
            output_dir: mode.output_dir(),
            source_maps: mode.source_maps(),
            clean_before_build,
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self::resolve(&HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_env_selects_production() {
        let settings = BuildSettings::resolve(&env(&[]));
        assert_eq!(settings.mode, Mode::Production);
        assert_eq!(settings.output_dir, PathBuf::from("dist"));
        assert_eq!(settings.source_maps, SourceMapMode::SeparateFile);
        assert!(!settings.clean_before_build);
    }

    #[test]
    fn exact_development_selects_development() {
        let settings = BuildSettings::resolve(&env(&[(APP_ENV, "development")]));
        assert_eq!(settings.mode, Mode::Development);
        assert_eq!(settings.output_dir, PathBuf::from("build"));
        assert_eq!(settings.source_maps, SourceMapMode::Inline);
    }

    #[test]
    fn non_exact_app_env_falls_back_to_production() {
        for value in ["Development", "dev", "DEVELOPMENT", "production", "staging", ""] {
            let settings = BuildSettings::resolve(&env(&[(APP_ENV, value)]));
            assert_eq!(settings.mode, Mode::Production, "APP_ENV={value:?}");
        }
    }

    #[test]
    fn clean_requires_exact_true() {
        assert!(BuildSettings::resolve(&env(&[(CLEAN_FOLDERS, "true")])).clean_before_build);
        for value in ["TRUE", "True", "1", "yes", "false", ""] {
            let settings = BuildSettings::resolve(&env(&[(CLEAN_FOLDERS, value)]));
            assert!(!settings.clean_before_build, "CLEAN_FOLDERS={value:?}");
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let input = env(&[(APP_ENV, "development"), (CLEAN_FOLDERS, "true")]);
        assert_eq!(BuildSettings::resolve(&input), BuildSettings::resolve(&input));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let settings = BuildSettings::resolve(&env(&[("PATH", "/usr/bin"), ("HOME", "/root")]));
        assert_eq!(settings, BuildSettings::default());
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Mode::Development).unwrap(),
            serde_json::json!("development")
        );
        assert_eq!(
            serde_json::to_value(SourceMapMode::SeparateFile).unwrap(),
            serde_json::json!("separate-file")
        );
    }
}
