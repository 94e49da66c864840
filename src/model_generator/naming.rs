use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use serde::Deserialize;

/// Policy converting a table name into an output filename stem.
///
/// A closed set selectable by config tag; there is deliberately no way to
/// supply executable naming code. An unrecognized tag fails config parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingStrategy {
    /// Lower-case the table name, then convert snake_case to camelCase
    #[default]
    CamelCase,
    SnakeCase,
    KebabCase,
    PascalCase,
}

impl NamingStrategy {
    /// Filename for a table under this strategy
    pub fn file_name(&self, table_name: &str, extension: &str) -> String {
        let stem = match self {
            NamingStrategy::CamelCase => table_name.to_lowercase().to_lower_camel_case(),
            NamingStrategy::SnakeCase => table_name.to_snake_case(),
            NamingStrategy::KebabCase => table_name.to_kebab_case(),
            NamingStrategy::PascalCase => table_name.to_upper_camel_case(),
        };
        format!("{}.{}", stem, extension)
    }
}
