use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One asset-processing rule: file patterns plus an ordered processor chain.
///
/// Processors are external collaborators referenced by name; their options
/// are forwarded verbatim and never interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRule {
    /// File patterns this rule applies to
    pub test: Vec<String>,

    /// Path fragments excluded from matching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Processors applied in order
    pub processors: Vec<ProcessorRef>,
}

/// Reference to an external asset processor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorRef {
    pub name: String,

    /// Processor-specific configuration, forwarded as-is
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl ProcessorRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// The default rule set: scripts, styles, TypeScript, images, and fonts.
///
/// Order matters — downstream pipelines match rules top to bottom.
pub(crate) fn default_rules() -> Vec<AssetRule> {
    vec![
        AssetRule {
            test: vec!["*.js".into(), "*.jsx".into()],
            exclude: vec!["node_modules".into(), "dist".into(), "build".into()],
            processors: vec![ProcessorRef::new("babel")],
        },
        AssetRule {
            test: vec!["*.scss".into(), "*.css".into()],
            exclude: vec![],
            processors: vec![
                ProcessorRef::new("css-extract"),
                ProcessorRef::with_options("css", json!({ "import_processors": 2 })),
                ProcessorRef::new("postcss"),
                ProcessorRef::with_options(
                    "sass",
                    json!({ "include_paths": ["node_modules"] }),
                ),
            ],
        },
        AssetRule {
            test: vec!["*.ts".into(), "*.tsx".into()],
            exclude: vec![],
            processors: vec![ProcessorRef::with_options(
                "typescript",
                json!({ "transpile_only": true }),
            )],
        },
        AssetRule {
            test: vec![
                "*.pdf".into(),
                "*.jpg".into(),
                "*.jpeg".into(),
                "*.png".into(),
                "*.gif".into(),
                "*.ico".into(),
            ],
            exclude: vec![],
            processors: vec![
                ProcessorRef::with_options(
                    "inline-url",
                    json!({ "limit": 8000, "name": "images/[hash]-[name].[ext]" }),
                ),
                ProcessorRef::new("image-optimizer"),
            ],
        },
        AssetRule {
            test: vec!["*.svg".into()],
            exclude: vec![],
            processors: vec![
                ProcessorRef::with_options(
                    "inline-url",
                    json!({ "limit": 8000, "name": "images/[hash]-[name].[ext]" }),
                ),
                ProcessorRef::new("image-optimizer"),
            ],
        },
        AssetRule {
            test: vec!["*.woff".into(), "*.woff2".into()],
            exclude: vec![],
            processors: vec![ProcessorRef::with_options(
                "inline-url",
                json!({
                    "limit": 50000,
                    "mimetype": "application/font-woff",
                    "name": "fonts/[name].[ext]",
                }),
            )],
        },
        AssetRule {
            test: vec!["*.ttf".into(), "*.eot".into()],
            exclude: vec![],
            processors: vec![ProcessorRef::with_options(
                "file-emit",
                json!({ "name": "fonts/[name].[ext]" }),
            )],
        },
    ]
}
