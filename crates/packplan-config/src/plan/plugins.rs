use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One external plugin invocation in the plan's ordered plugin list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInvocation {
    pub name: String,

    /// Plugin-specific configuration, forwarded as-is
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginInvocation {
    pub fn new(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// Plugins present in every plan: CSS extraction and HTML templating.
pub(crate) fn base_plugins() -> Vec<PluginInvocation> {
    vec![
        PluginInvocation::new("css-extract", json!({ "filename": "css/[name].css" })),
        PluginInvocation::new(
            "html",
            json!({
                "title": "Packplan App",
                "filename": "index.html",
                "template": "src/views/index.html",
                "hash": true,
                "minify": { "html5": true },
            }),
        ),
    ]
}

/// The optional cleanup plugin; appended last when cleaning is requested.
pub(crate) fn clean_plugin() -> PluginInvocation {
    PluginInvocation::new("clean", json!({ "targets": ["build", "dist"] }))
}
