use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{info, Level};

use modelgen::pipeline;

#[derive(Parser)]
#[command(name = "modelgen")]
#[command(about = "Generate ORM model scaffolding from legacy MySQL schema dumps")]
#[command(version = "0.1.0")]
#[command(long_about = "Modelgen converts a legacy schema dump (a text file of CREATE TABLE statements from one export dialect) into one model-definition file per table. It extracts table and column metadata via pattern matching, resolves raw SQL types to abstract model types, renders each table through a text template and writes the results into a freshly reset output directory.")]
#[command(after_help = "EXAMPLES:
    # Generate model files from a schema dump
    modelgen generate -s dump.sql -o models/

    # Generate with a config file, writing model files in parallel
    modelgen generate -s dump.sql -o models/ -c modelgen.json --parallel

    # Print parsed table descriptors without writing anything
    modelgen inspect -s dump.sql --format json")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Set log level explicitly
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(ValueEnum, Clone, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model files from a schema dump
    #[command(long_about = "Generate one model-definition file per CREATE TABLE statement in the schema dump. The output directory is destructively reset before any file is written; a single file-write failure is logged and counted without aborting the remaining tables.")]
    Generate {
        /// Path to the schema dump (CREATE TABLE statements)
        #[arg(short, long, value_name = "FILE")]
        sql_file: PathBuf,

        /// Destination directory, reset before any writes
        #[arg(short, long, value_name = "DIR")]
        output_dir: PathBuf,

        /// Optional JSON config file (type mapping, default values, naming)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write model files on a worker pool instead of sequentially
        #[arg(long)]
        parallel: bool,
    },

    /// Parse a schema dump and print the table descriptors
    #[command(long_about = "Parse the schema dump and print the extracted table descriptors without resetting any directory or writing any file. Useful for reviewing the parsed metadata and type resolution before generating.")]
    Inspect {
        /// Path to the schema dump (CREATE TABLE statements)
        #[arg(short, long, value_name = "FILE")]
        sql_file: PathBuf,

        /// Optional JSON config file (type mapping, default values)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format for the descriptors
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    info!("Starting modelgen v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Generate {
            sql_file,
            output_dir,
            config,
            parallel,
        } => {
            info!(
                "Generating models from {:?} into {:?} (parallel={})",
                sql_file, output_dir, parallel
            );

            match pipeline::generate(&sql_file, &output_dir, config.as_deref(), parallel) {
                Ok(summary) => {
                    info!("Generation completed: {}", summary.summary());
                    if !summary.is_successful() {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Generation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Inspect {
            sql_file,
            config,
            format,
        } => {
            info!("Inspecting schema dump {:?}", sql_file);

            match pipeline::inspect(&sql_file, config.as_deref()) {
                Ok(tables) => match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&tables)?);
                    }
                    OutputFormat::Text => {
                        for (name, table) in &tables {
                            let primary_key = table.primary_key.as_deref().unwrap_or("-");
                            println!(
                                "{} (pk: {}, {} fields) {}",
                                name,
                                primary_key,
                                table.fields.len(),
                                table.comment
                            );
                        }
                    }
                },
                Err(e) => {
                    eprintln!("Inspect failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Initialize logging based on CLI configuration
fn initialize_logging(cli: &Cli) -> Result<()> {
    let log_level = if let Some(level) = &cli.log_level {
        level.clone().into()
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_thread_ids(cli.verbose)
            .with_file(cli.verbose)
            .with_line_number(cli.verbose)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_thread_ids(cli.verbose)
            .with_file(cli.verbose)
            .with_line_number(cli.verbose)
            .init();
    }

    Ok(())
}
