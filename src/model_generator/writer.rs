use super::naming::NamingStrategy;
use super::renderer::ModelRenderer;
use crate::types::{GenerationSummary, TableCollection, TableDescriptor};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Reset the destination directory: recursively delete whatever is there,
/// then recreate it, or create it from scratch when absent.
pub fn reset_output_dir(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)
}

/// Writes one rendered model file per table into the output directory
pub struct OutputWriter {
    output_dir: PathBuf,
    naming: NamingStrategy,
    extension: String,
}

impl OutputWriter {
    pub fn new(output_dir: PathBuf, naming: NamingStrategy, extension: impl Into<String>) -> Self {
        Self {
            output_dir,
            naming,
            extension: extension.into(),
        }
    }

    /// Render and write every table in collection order.
    ///
    /// A single write failure is logged and counted; the remaining tables
    /// still get written. With `parallel` the per-table work runs on a
    /// rayon pool — each table's outcome stays isolated and the outcomes are
    /// collected in collection order, so counts and failure logs come out
    /// identical to the sequential path.
    pub fn write_models(
        &self,
        tables: &TableCollection,
        renderer: &ModelRenderer,
        parallel: bool,
    ) -> GenerationSummary {
        let outcomes: Vec<(String, io::Result<()>)> = if parallel {
            let entries: Vec<_> = tables.iter().collect();
            entries
                .into_par_iter()
                .map(|(name, table)| (name.clone(), self.write_one(table, renderer)))
                .collect()
        } else {
            tables
                .iter()
                .map(|(name, table)| (name.clone(), self.write_one(table, renderer)))
                .collect()
        };

        let mut summary = GenerationSummary {
            tables: tables.len(),
            ..Default::default()
        };
        for (name, outcome) in outcomes {
            match outcome {
                Ok(()) => summary.written += 1,
                Err(e) => {
                    error!("failed to write model for table `{}`: {}", name, e);
                    summary.failed += 1;
                    summary.failed_tables.push(name);
                }
            }
        }
        summary
    }

    fn write_one(&self, table: &TableDescriptor, renderer: &ModelRenderer) -> io::Result<()> {
        let file_name = self.naming.file_name(&table.name, &self.extension);
        let path = self.output_dir.join(file_name);
        let model = renderer.render(table);
        fs::write(&path, model)?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}
