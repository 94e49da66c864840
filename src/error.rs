use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the modelgen system
#[derive(Error, Debug)]
pub enum ModelgenError {
    #[error("sql source file not found: {}", path.display())]
    SqlSourceMissing { path: PathBuf },

    #[error("config file not found: {}", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("no CREATE TABLE statements found in sql source")]
    NoTablesFound,

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("unknown column type `{raw_type}` for column `{column}` in table `{table}`")]
    UnknownType {
        table: String,
        column: String,
        raw_type: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelgenError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
