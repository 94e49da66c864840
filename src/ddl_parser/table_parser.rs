use crate::error::ModelgenError;
use crate::model_generator::type_mapper::TypeMapping;
use crate::types::{FieldDescriptor, ModelType, TableDescriptor};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::warn;

static TABLE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)CREATE TABLE `(\w+)`").unwrap());

static TABLE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)COMMENT = '(.*)' ROW_FORMAT = Compact").unwrap());

static PRIMARY_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)PRIMARY KEY \(`(.+)`\)").unwrap());

// The gap between the column name and the marker must not cross another
// backticked identifier, otherwise a name from an earlier column would be
// captured.
static AUTOINCREMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)`(\w+)`[^`]*AUTO_INCREMENT").unwrap());

// One column definition: `name` TYPE(length), optionally carrying a
// DEFAULT/COMMENT pair before the closing comma. A lone DEFAULT or a lone
// COMMENT is not captured, matching the dialect this was written against.
static FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)`(\w+)`\s+(\w+)\((\d+)\)(?:[^,]*?DEFAULT\s+(.*?)\s+COMMENT\s+'([^']*)')?[^,]*,")
        .unwrap()
});

/// Parse one CREATE TABLE fragment into a TableDescriptor.
///
/// Pure function of its inputs: the fragment, the active type mapping and
/// the global default-value overrides keyed by column name. Field order
/// preserves DDL declaration order. Columns without a `(length)` suffix and
/// a trailing column without a comma do not match the column pattern and are
/// dropped, a known limitation of the supported dialect.
pub fn parse_table(
    fragment: &str,
    mapping: &TypeMapping,
    default_overrides: &HashMap<String, String>,
) -> Result<TableDescriptor, ModelgenError> {
    let name = TABLE_NAME
        .captures(fragment)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| {
            let head = fragment.lines().next().unwrap_or("").trim();
            ModelgenError::parse(format!("table statement without a recognizable name: {}", head))
        })?;

    let comment = TABLE_COMMENT
        .captures(fragment)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let primary_key = PRIMARY_KEY.captures(fragment).map(|caps| caps[1].to_string());

    let autoincrement_field = AUTOINCREMENT
        .captures(fragment)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let mut fields = Vec::new();
    for caps in FIELD.captures_iter(fragment) {
        // The autoincrement column belongs to its own matcher above and is
        // not recorded as a regular field.
        if caps[0].to_ascii_uppercase().contains("AUTO_INCREMENT") {
            continue;
        }

        let field_name = caps[1].to_string();
        let raw_type = &caps[2];
        let model_type = mapping.resolve(raw_type);
        if model_type.is_unknown() {
            warn!(
                "no type mapping for `{}` (table `{}`, column `{}`)",
                raw_type, name, field_name
            );
        }

        let mut default_value = caps
            .get(4)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        if let Some(value) = default_overrides.get(&field_name) {
            default_value = value.clone();
        }

        fields.push(FieldDescriptor {
            name: field_name,
            model_type,
            length: caps[3].to_string(),
            default_value,
            comment: caps.get(5).map(|m| m.as_str().to_string()).unwrap_or_default(),
        });
    }

    Ok(TableDescriptor {
        name,
        comment,
        primary_key,
        autoincrement_field,
        fields,
    })
}

/// First field whose type failed to resolve, as (column, raw token)
pub(crate) fn first_unknown(table: &TableDescriptor) -> Option<(&str, &str)> {
    table.fields.iter().find_map(|field| match &field.model_type {
        ModelType::Unknown(raw) => Some((field.name.as_str(), raw.as_str())),
        ModelType::Named(_) => None,
    })
}
