// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::resolve_output;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::notify_export_success;
use crate::export::session_csv::write_session_csv;
use crate::models::{Session, Sheet};
use crate::ui::messages::error;
use std::path::{Path, PathBuf};
use tracing::warn;

/// High-level export entry points.
///
/// Failures are reported to the operator and turned into `None`; they never
/// end the process.
pub struct ExportLogic;

impl ExportLogic {
    /// Session report, default name `attendance_report_<timestamp>.csv`.
    pub fn session(session: &Session, output: Option<&Path>, cfg: &Config) -> Option<PathBuf> {
        let path = resolve_output(output, cfg, "attendance_report", "csv");
        report(write_session_csv(session, &path), path, "Error exporting file")
    }

    /// Loaded sheet as CSV or JSON, default name `data_<timestamp>.<ext>`.
    pub fn sheet(
        sheet: &Sheet,
        format: ExportFormat,
        output: Option<&Path>,
        cfg: &Config,
    ) -> Option<PathBuf> {
        let path = resolve_output(output, cfg, "data", format.as_str());
        let result = match format {
            ExportFormat::Csv => export_csv(sheet, &path),
            ExportFormat::Json => export_json(sheet, &path),
        };
        report(result, path, "Error exporting")
    }
}

fn report(result: AppResult<()>, path: PathBuf, context: &str) -> Option<PathBuf> {
    match result {
        Ok(()) => {
            notify_export_success(&path);
            Some(path)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "export failed");
            match e {
                AppError::EmptyDataset => error(e),
                other => error(format!("{context}: {other}")),
            }
            None
        }
    }
}
