// src/export/session_csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::record::{Record, labels};
use crate::models::{ClassInfo, Session};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

const CLASS_SECTION: &str = "CLASS INFORMATION";

/// Multi-section session report:
///
/// - class info (title, header, values, blank line)
/// - attendance, always present, followed by a blank line
/// - behavior and detention, only when they hold records
///
/// Values are quoted only when they contain a comma, quote or newline.
pub fn render_session_csv(session: &Session) -> AppResult<String> {
    let mut out = String::new();

    out.push_str(&csv_line(&[CLASS_SECTION])?);
    out.push_str(&csv_line(&ClassInfo::LABELS)?);
    out.push_str(&csv_line(&session.class_info.values())?);
    out.push('\n');

    push_section(&mut out, session.attendance())?;
    out.push('\n');

    if !session.behavior().is_empty() {
        push_section(&mut out, session.behavior())?;
        out.push('\n');
    }

    if !session.detention().is_empty() {
        push_section(&mut out, session.detention())?;
    }

    Ok(out)
}

#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn write_session_csv(session: &Session, path: &Path) -> AppResult<()> {
    let content = render_session_csv(session)?;
    fs::write(path, content)?;
    debug!(
        attendance = session.attendance().len(),
        behavior = session.behavior().len(),
        detention = session.detention().len(),
        "session report written"
    );
    Ok(())
}

fn push_section<R: Record>(out: &mut String, records: &[R]) -> AppResult<()> {
    out.push_str(&csv_line(&[R::SECTION])?);
    out.push_str(&csv_line(&labels::<R>())?);
    for record in records {
        out.push_str(&csv_line(&record.values())?);
    }
    Ok(())
}

/// One newline-terminated CSV line.
fn csv_line(fields: &[&str]) -> AppResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(fields)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
