use indexmap::IndexMap;

// Helper defaults
pub(crate) fn default_entries() -> IndexMap<String, String> {
    IndexMap::from([("main".to_string(), "src/js/index".to_string())])
}

pub(crate) fn default_public_path() -> String {
    "/".to_string()
}

pub(crate) fn default_filename() -> String {
    "js/[name].js".to_string()
}

pub(crate) fn default_content_base() -> std::path::PathBuf {
    std::path::PathBuf::from("build")
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_extensions() -> Vec<String> {
    [
        ".js", ".jsx", ".ts", ".tsx", ".json", ".css", ".scss", ".ttf", ".eot", ".woff",
        ".woff2",
    ]
    .iter()
    .map(|ext| ext.to_string())
    .collect()
}
