use crate::error::ModelgenError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Statement boundary for the supported export dialect: opens with the
/// table-creation keyword, closes at the first row-format compact marker.
static TABLE_STATEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)CREATE TABLE.*?Compact").unwrap());

/// Split a schema dump into ordered CREATE TABLE fragments.
///
/// Matching is case-insensitive, spans newlines and is non-greedy, so each
/// fragment runs from its opening keyword to the nearest row-format marker.
/// A statement that never reaches the marker is dropped without diagnostics;
/// that is a documented limitation of the dialect, not an error. An empty
/// result is fatal for the whole run.
pub fn extract_fragments(sql: &str) -> Result<Vec<&str>, ModelgenError> {
    let fragments: Vec<&str> = TABLE_STATEMENT
        .find_iter(sql)
        .map(|m| m.as_str())
        .collect();

    if fragments.is_empty() {
        return Err(ModelgenError::NoTablesFound);
    }

    Ok(fragments)
}
