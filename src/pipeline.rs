use crate::config::GeneratorConfig;
use crate::ddl_parser::{self, table_parser};
use crate::error::ModelgenError;
use crate::model_generator::renderer::ModelRenderer;
use crate::model_generator::writer::{self, OutputWriter};
use crate::types::{GenerationSummary, TableCollection};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Run the full generation pipeline.
///
/// Step order is fixed: validate inputs, reset the output directory, load
/// config, read the DDL source, extract and parse, then the per-table write
/// loop. Every failure before the write loop aborts the run with nothing
/// written (the output directory may already have been reset by then); a
/// failure inside the loop only costs that table's file.
pub fn generate(
    sql_file: &Path,
    output_dir: &Path,
    config_file: Option<&Path>,
    parallel: bool,
) -> Result<GenerationSummary, ModelgenError> {
    if !sql_file.exists() {
        return Err(ModelgenError::SqlSourceMissing {
            path: sql_file.to_path_buf(),
        });
    }
    if let Some(path) = config_file {
        if !path.exists() {
            return Err(ModelgenError::ConfigMissing {
                path: path.to_path_buf(),
            });
        }
    }

    info!("Step 1: Resetting output directory {}", output_dir.display());
    writer::reset_output_dir(output_dir)?;

    info!("Step 2: Loading configuration");
    let config = GeneratorConfig::load(config_file)?;

    info!("Step 3: Reading sql source {}", sql_file.display());
    let sql = fs::read_to_string(sql_file)?;

    info!("Step 4: Parsing table statements");
    let tables = parse_tables(&sql, &config)?;
    info!("Parsed {} tables", tables.len());

    info!("Step 5: Generating model files");
    let renderer = match &config.model_tmpl {
        Some(template) => ModelRenderer::new(template.clone()),
        None => ModelRenderer::with_default_template(),
    };
    let output_writer = OutputWriter::new(
        output_dir.to_path_buf(),
        config.file_naming,
        config.model_ext.as_str(),
    );
    let summary = output_writer.write_models(&tables, &renderer, parallel);

    info!("Generation finished: {}", summary.summary());
    Ok(summary)
}

/// Parse-only entry: extract and parse the source without touching the
/// filesystem beyond reading inputs. Nothing is reset, nothing is written.
pub fn inspect(
    sql_file: &Path,
    config_file: Option<&Path>,
) -> Result<TableCollection, ModelgenError> {
    if !sql_file.exists() {
        return Err(ModelgenError::SqlSourceMissing {
            path: sql_file.to_path_buf(),
        });
    }
    if let Some(path) = config_file {
        if !path.exists() {
            return Err(ModelgenError::ConfigMissing {
                path: path.to_path_buf(),
            });
        }
    }

    let config = GeneratorConfig::load(config_file)?;
    let sql = fs::read_to_string(sql_file)?;
    parse_tables(&sql, &config)
}

/// Extract fragments and parse each into the ordered table collection.
///
/// Insertion order is document order. A duplicate table name keeps the last
/// definition, with a warning naming the table.
fn parse_tables(sql: &str, config: &GeneratorConfig) -> Result<TableCollection, ModelgenError> {
    let fragments = ddl_parser::extract_fragments(sql)?;
    let mapping = config.type_mapping();

    let mut tables = TableCollection::new();
    for fragment in fragments {
        let table = ddl_parser::parse_table(fragment, &mapping, &config.default_values)?;

        if config.fail_on_unknown_type {
            if let Some((column, raw_type)) = table_parser::first_unknown(&table) {
                return Err(ModelgenError::UnknownType {
                    table: table.name.clone(),
                    column: column.to_string(),
                    raw_type: raw_type.to_string(),
                });
            }
        }

        let name = table.name.clone();
        if tables.insert(table).is_some() {
            warn!("duplicate table `{}` in source, keeping the last definition", name);
        }
    }

    Ok(tables)
}
