use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::plan::helpers::{
    default_content_base, default_extensions, default_filename, default_public_path, default_true,
};

/// Output location and naming for emitted bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Directory all generated files are written into
    pub dir: PathBuf,

    /// Public URL prefix the bundles are served from
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Filename pattern for emitted scripts ([name] is the entry name)
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            public_path: default_public_path(),
            filename: default_filename(),
        }
    }
}

/// Settings forwarded to the external development server.
///
/// Nothing in this crate serves anything; these fields only describe how the
/// collaborator should behave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    #[serde(default = "default_content_base")]
    pub content_base: PathBuf,

    #[serde(default = "default_true")]
    pub watch_content_base: bool,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            content_base: default_content_base(),
            watch_content_base: true,
        }
    }
}

/// Module resolution options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extensions tried in order when an import omits one
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}
