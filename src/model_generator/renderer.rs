use super::template;
use crate::types::TableDescriptor;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default model template bundled with the binary
const DEFAULT_MODEL_TEMPLATE: &str = include_str!("../../templates/model.js.tmpl");

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
static BLANK_BETWEEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s+\n").unwrap());

/// Renders table descriptors through a model template
pub struct ModelRenderer {
    template: String,
}

impl ModelRenderer {
    pub fn new(template: String) -> Self {
        Self { template }
    }

    /// Renderer over the bundled default template
    pub fn with_default_template() -> Self {
        Self::new(DEFAULT_MODEL_TEMPLATE.to_string())
    }

    /// Render one table and normalize whitespace.
    ///
    /// Both passes run unconditionally, whatever the template produced:
    /// first runs of two or more newlines collapse into one, then a
    /// whitespace-only line between two non-blank lines is removed.
    pub fn render(&self, table: &TableDescriptor) -> String {
        let rendered = template::render(&self.template, table);
        let collapsed = BLANK_RUNS.replace_all(&rendered, "\n");
        BLANK_BETWEEN.replace_all(&collapsed, "\n").into_owned()
    }
}

impl Default for ModelRenderer {
    fn default() -> Self {
        Self::with_default_template()
    }
}
