//! Unified application error type.
//! Every module (models, core, import, export, cli) returns AppError so that
//! the binaries can decide in one place whether to report and continue or abort.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Operator
    // ---------------------------
    #[error("Entry cancelled by user")]
    Cancelled,

    // ---------------------------
    // Field values
    // ---------------------------
    #[error("Severity is not a number: '{0}'")]
    InvalidSeverity(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("No data to export")]
    EmptyDataset,

    #[error("Export error: {0}")]
    Export(String),

    #[error("File not found: {0}")]
    NotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;
