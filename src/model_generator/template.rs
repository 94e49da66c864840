use crate::types::{FieldDescriptor, TableDescriptor};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static FIELDS_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{\{#fields\}\}(.*?)\{\{/fields\}\}").unwrap());

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").unwrap());

/// Render a table descriptor through a template.
///
/// The template language is deliberately tiny: `{{var}}` interpolation plus
/// one `{{#fields}}..{{/fields}}` block whose body repeats per field in
/// declaration order. Table scope exposes `name`, `comment`, `primaryKey`
/// and `autoincrementField`; field scope exposes `name`, `type`, `length`,
/// `defaultValue` and `comment`. A placeholder that resolves to nothing is
/// left untouched so a template typo stays visible in the output.
pub fn render(template: &str, table: &TableDescriptor) -> String {
    let expanded = FIELDS_BLOCK.replace_all(template, |caps: &Captures| {
        let body = &caps[1];
        table
            .fields
            .iter()
            .map(|field| interpolate(body, |key| field_value(field, key)))
            .collect::<String>()
    });

    interpolate(&expanded, |key| table_value(table, key))
}

fn interpolate<F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn table_value(table: &TableDescriptor, key: &str) -> Option<String> {
    match key {
        "name" => Some(table.name.clone()),
        "comment" => Some(table.comment.clone()),
        "primaryKey" => Some(table.primary_key.clone().unwrap_or_default()),
        "autoincrementField" => Some(table.autoincrement_field.clone()),
        _ => None,
    }
}

fn field_value(field: &FieldDescriptor, key: &str) -> Option<String> {
    match key {
        "name" => Some(field.name.clone()),
        "type" => Some(field.model_type.to_string()),
        "length" => Some(field.length.clone()),
        "defaultValue" => Some(field.default_value.clone()),
        "comment" => Some(field.comment.clone()),
        _ => None,
    }
}
