use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract model type for a column, resolved through the active type mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelType {
    /// A raw SQL type token that resolved to an abstract type name
    Named(String),
    /// A raw SQL type token with no entry in the type mapping; carries the
    /// original token so it stays visible in generated output
    Unknown(String),
}

impl ModelType {
    pub fn is_unknown(&self) -> bool {
        matches!(self, ModelType::Unknown(_))
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelType::Named(name) => write!(f, "{}", name),
            ModelType::Unknown(raw) => write!(f, "UNKNOWN({})", raw),
        }
    }
}

/// One parsed column definition, in DDL declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Column name
    pub name: String,
    /// Abstract model type resolved from the raw SQL type token
    #[serde(rename = "type")]
    pub model_type: ModelType,
    /// Declared length, kept as the numeric string from the DDL
    pub length: String,
    /// Default value text, possibly replaced by a global override
    pub default_value: String,
    /// Column comment, empty when the DDL carries none
    pub comment: String,
}

/// Structured metadata for one CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDescriptor {
    /// Table name
    pub name: String,
    /// Table comment, empty when the DDL carries none
    pub comment: String,
    /// Primary key column token, verbatim; composite keys stay one string
    pub primary_key: Option<String>,
    /// Name of the autoincrement column, empty when the table has none
    pub autoincrement_field: String,
    /// Column definitions in DDL declaration order
    pub fields: Vec<FieldDescriptor>,
}

/// Ordered mapping from table name to descriptor.
///
/// Iteration order is the order tables were encountered in the source
/// document; this is a contract, not an accident of the backing store.
/// Re-inserting an existing name replaces the descriptor in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TableCollection(IndexMap<String, TableDescriptor>);

impl TableCollection {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a descriptor under its table name, returning the previous
    /// descriptor when the name was already present
    pub fn insert(&mut self, table: TableDescriptor) -> Option<TableDescriptor> {
        self.0.insert(table.name.clone(), table)
    }

    pub fn get(&self, name: &str) -> Option<&TableDescriptor> {
        self.0.get(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, TableDescriptor> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TableCollection {
    type Item = (&'a String, &'a TableDescriptor);
    type IntoIter = indexmap::map::Iter<'a, String, TableDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of one generation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationSummary {
    /// Number of tables parsed from the source document
    pub tables: usize,
    /// Number of model files written
    pub written: usize,
    /// Number of tables whose file write failed
    pub failed: usize,
    /// Names of the tables whose file write failed
    pub failed_tables: Vec<String>,
}

impl GenerationSummary {
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} tables parsed, {} files written, {} failed",
            self.tables, self.written, self.failed
        )
    }
}
