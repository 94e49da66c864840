use crate::error::ModelgenError;
use crate::model_generator::naming::NamingStrategy;
use crate::model_generator::type_mapper::TypeMapping;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Runtime configuration merged over built-in defaults.
///
/// Loaded from an optional JSON document with camelCase keys; every
/// recognized key is optional, unrecognized keys are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Entries merged over the default type mapping; caller wins per key
    pub data_type: HashMap<String, String>,
    /// Per-column default-value overrides, keyed by column name and applied
    /// across all tables
    pub default_values: HashMap<String, String>,
    /// Output filename policy
    pub file_naming: NamingStrategy,
    /// Output file extension
    pub model_ext: String,
    /// Inline template text replacing the bundled default
    pub model_tmpl: Option<String>,
    /// Abort the run when a raw type token has no mapping
    pub fail_on_unknown_type: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_type: HashMap::new(),
            default_values: HashMap::new(),
            file_naming: NamingStrategy::default(),
            model_ext: "js".to_string(),
            model_tmpl: None,
            fail_on_unknown_type: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from an optional path.
    ///
    /// No path means defaults. A supplied-but-missing path and malformed
    /// JSON are both fatal; an unrecognized `fileNaming` tag fails here too,
    /// before any DDL processing.
    pub fn load(path: Option<&Path>) -> Result<Self, ModelgenError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(ModelgenError::ConfigMissing {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            ModelgenError::config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// The default type mapping with this config's overrides merged in
    pub fn type_mapping(&self) -> TypeMapping {
        let mut mapping = TypeMapping::default();
        mapping.merge(&self.data_type);
        mapping
    }
}
