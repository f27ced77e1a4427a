// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::Sheet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, instrument};

/// Export JSON pretty-printed (2-space indent), one object per row with the
/// keys in header order.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn export_json(sheet: &Sheet, path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(sheet)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    debug!(rows = sheet.len(), "JSON written");
    Ok(())
}

/// Export CSV: the sheet header followed by one line per row.
/// An empty sheet is refused and nothing is written.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn export_csv(sheet: &Sheet, path: &Path) -> AppResult<()> {
    if sheet.is_empty() {
        return Err(AppError::EmptyDataset);
    }

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(sheet.headers())?;
    for row in sheet.rows() {
        wtr.write_record(row)?;
    }

    wtr.flush()?;

    debug!(rows = sheet.len(), "CSV written");
    Ok(())
}
