use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from a `schema-graph` config file.
///
/// ```toml
/// schema = "api/schema.json"
/// depth = 4
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Introspection JSON file, relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<PathBuf>,

    /// Maximum expansion depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,

    /// Expand without a depth limit. Cannot be combined with `depth`.
    #[serde(default)]
    pub unbounded: bool,
}

impl GraphConfig {
    /// The schema path resolved against the directory containing the config
    /// file at `config_path`.
    #[must_use]
    pub fn schema_path(&self, config_path: &Path) -> Option<PathBuf> {
        let schema = self.schema.as_ref()?;
        if schema.is_absolute() {
            return Some(schema.clone());
        }
        let base_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
        Some(base_dir.join(schema))
    }
}
