// src/export/mod.rs

pub(crate) mod fs_utils;
mod json_csv;
pub mod logic;
pub mod session_csv;

pub use fs_utils::ensure_writable;
pub use json_csv::{export_csv, export_json};
pub use logic::ExportLogic;
pub use session_csv::{render_session_csv, write_session_csv};

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(path: &Path) {
    success(format!("Data exported to: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
