// src/import/tsv.rs

use crate::errors::{AppError, AppResult};
use crate::models::Sheet;
use crate::ui::messages::error;
use csv::StringRecord;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Read a tab-separated file. The first row is the header.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_tsv(path: &Path) -> AppResult<Sheet> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
        _ => AppError::Io(e),
    })?;
    parse_tsv(file)
}

/// Parse tab-separated text.
///
/// Skipped rows: those whose values are all empty, and those where any value
/// starts with `#` (the whole row is a comment). Short rows are padded with
/// empty values; cells beyond the header are dropped. A header name that
/// repeats keeps its first position and takes the value of its last cell.
pub fn parse_tsv<R: Read>(reader: R) -> AppResult<Sheet> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let (headers, slots) = header_slots(rdr.headers()?);
    let width = headers.len();
    let mut sheet = Sheet::new(headers);
    let mut skipped = 0usize;

    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        if is_blank(&record) || is_comment(&record) {
            skipped += 1;
            continue;
        }

        let mut values = vec![String::new(); width];
        for (cell, &slot) in record.iter().zip(&slots) {
            values[slot] = cell.to_string();
        }
        sheet.push_row(values);

        let dropped = record.len().saturating_sub(slots.len());
        if dropped > 0 {
            debug!(row = line + 1, dropped, "row has more cells than the header");
        }
    }

    info!(rows = sheet.len(), skipped, "parsed tab-separated data");
    Ok(sheet)
}

/// Read `path`, reporting any failure to the operator.
/// `None` means the file could not be read.
pub fn load_or_report(path: &Path) -> Option<Sheet> {
    match read_tsv(path) {
        Ok(sheet) => Some(sheet),
        Err(e @ AppError::NotFound(_)) => {
            error(e);
            None
        }
        Err(e) => {
            error(format!("Error reading file: {e}"));
            None
        }
    }
}

/// Unique header names in first-seen order, and the slot each raw column
/// writes into.
fn header_slots(raw: &StringRecord) -> (Vec<String>, Vec<usize>) {
    let mut names: Vec<String> = Vec::new();
    let mut slots = Vec::with_capacity(raw.len());

    for name in raw.iter() {
        let slot = match names.iter().position(|n| n == name) {
            Some(existing) => {
                debug!(column = name, "repeated header, the later cell wins");
                existing
            }
            None => {
                names.push(name.to_string());
                names.len() - 1
            }
        };
        slots.push(slot);
    }

    (names, slots)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn is_comment(record: &StringRecord) -> bool {
    record.iter().any(|v| v.starts_with('#'))
}
