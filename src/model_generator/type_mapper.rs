use crate::types::ModelType;
use std::collections::HashMap;

/// Default correspondence from raw SQL type tokens to abstract model types.
/// The blob/text rows are deliberately uneven; generated models depend on
/// these exact values, so do not "fix" them here, override per project.
const DEFAULT_TYPE_MAPPINGS: &[(&str, &str)] = &[
    ("TINYINT", "INTEGER"),
    ("SMALLINT", "INTEGER"),
    ("MEDIUMINT", "INTEGER"),
    ("INT", "INTEGER"),
    ("INTEGER", "INTEGER"),
    ("BIGINT", "BIGINT"),
    ("FLOAT", "FLOAT"),
    ("DOUBLE", "DOUBLE"),
    ("DECIMAL", "DECIMAL"),
    ("DATE", "DATE"),
    ("TIME", "DATEONLY"),
    ("YEAR", "INTEGER"),
    ("DATETIME", "DATE"),
    ("CHAR", "STRING"),
    ("VARCHAR", "STRING"),
    ("TINYBLOB", "BLOB"),
    ("TINYTEXT", "STRING"),
    ("BLOB", "STRING"),
    ("TEXT", "TEXT"),
    ("MEDIUMBLOB", "BLOB"),
    ("MEDIUMTEXT", "STRING"),
    ("LONGBLOB", "STRING"),
    ("LONGTEXT", "BLOB"),
];

/// Maps raw SQL type tokens to abstract model type names
#[derive(Debug, Clone)]
pub struct TypeMapping {
    entries: HashMap<String, String>,
}

impl Default for TypeMapping {
    fn default() -> Self {
        Self {
            entries: DEFAULT_TYPE_MAPPINGS
                .iter()
                .map(|(token, name)| (token.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl TypeMapping {
    /// Create a type mapping with the default correspondence
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge caller-supplied entries over the current table; the caller wins
    /// on key collision. Keys are stored uppercase so lookups stay
    /// case-insensitive.
    pub fn merge(&mut self, overrides: &HashMap<String, String>) {
        for (token, name) in overrides {
            self.entries.insert(token.to_uppercase(), name.clone());
        }
    }

    /// Resolve a raw type token, case-insensitively.
    ///
    /// An absent entry is not an error at this layer; it surfaces as an
    /// explicit Unknown marker carrying the original token.
    pub fn resolve(&self, raw_type: &str) -> ModelType {
        match self.entries.get(&raw_type.to_uppercase()) {
            Some(name) => ModelType::Named(name.clone()),
            None => ModelType::Unknown(raw_type.to_string()),
        }
    }

    /// The abstract type name for a token, if one is mapped
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(&token.to_uppercase()).map(String::as_str)
    }

    /// Tokens of the default correspondence, for coverage checks in tests
    pub fn default_tokens() -> impl Iterator<Item = (&'static str, &'static str)> {
        DEFAULT_TYPE_MAPPINGS.iter().copied()
    }
}
