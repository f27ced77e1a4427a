// src/import/templates.rs

use crate::core::prompt::Console;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{error, success};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A pre-filled example file showing the expected column layout.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub file_name: &'static str,
    pub content: &'static str,
}

pub const ATTENDANCE: Template = Template {
    file_name: "attendance_template.tsv",
    content: "Student Name\tStatus (P/A/L/E)\tTime (HH:MM)\tNotes
John Smith\tP\t09:00\t
Jane Doe\tP\t09:05\tLate arrival
Mike Johnson\tA\t\tAbsence excuse submitted
Sarah Williams\tL\t10:30\t
Emily Brown\tP\t09:02\t
David Davis\tP\t09:01\t
Rachel Wilson\tE\t\tExcused absence

# Instructions:
# - Use TAB to separate columns
# - Status: P=Present, A=Absent, L=Late, E=Excused
# - Copy this format and add your data
# - Save as .tsv (Tab Separated Values) file
# - Use: rollcall-sheet your_file.tsv
",
};

pub const BEHAVIOR: Template = Template {
    file_name: "behavior_template.tsv",
    content: "Student Name\tIncident Type\tSeverity\tPoints\tNotes
John Smith\tDisruption\t2\t10\tTalked out of turn
Jane Doe\tDisrespect\t3\t15\tArgued with teacher
Mike Johnson\tBullying\t4\t20\tName calling
Sarah Williams\tDishonesty\t2\t10\tCopied homework
Emily Brown\tProperty Damage\t3\t15\tBroke desk

# Severity: 1=Minor, 2=Moderate, 3=Serious, 4=Critical
# Points auto-calculated as: severity * 5 (unless specified)
# Incident Types: Disruption, Disrespect, Aggression, Bullying, Dishonesty, Property Damage, Other
",
};

pub const DETENTION: Template = Template {
    file_name: "detention_template.tsv",
    content: "Student Name\tReason\tDuration\tDate\tTime\tRoom/Location
John Smith\tRepeated disruption\t1hr\t2024-12-01\t15:30\tRoom 201
Jane Doe\tIncomplete homework\t30min\t2024-12-02\t14:00\tLibrary
Mike Johnson\tBehavioral incident\t2hrs\t2024-12-03\t15:30\tRoom 201
Sarah Williams\tTardiness\t30min\t2024-12-04\t14:30\tRoom 101

# Duration: 30min, 1hr, 2hrs, custom
# Date format: YYYY-MM-DD
# Time format: HH:MM
",
};

pub const ALL: [Template; 3] = [ATTENDANCE, BEHAVIOR, DETENTION];

impl Template {
    pub fn write_to(&self, dir: &Path) -> AppResult<PathBuf> {
        let path = dir.join(self.file_name);
        fs::write(&path, self.content)?;
        debug!(path = %path.display(), "template written");
        Ok(path)
    }
}

/// Write every template into `dir`. Existing files are only replaced after
/// confirmation, unless `force` is set. A template that cannot be written is
/// reported and skipped; the others are still written. End of input at the
/// overwrite question aborts.
pub fn write_templates<R: BufRead, W: Write>(
    dir: &Path,
    force: bool,
    console: &mut Console<R, W>,
) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::new();

    for template in ALL {
        let target = dir.join(template.file_name);
        let result = ensure_writable(&target, force, console).and_then(|_| template.write_to(dir));

        match result {
            Ok(path) => {
                success(format!("Created {}", template.file_name));
                written.push(path);
            }
            Err(AppError::Cancelled) => return Err(AppError::Cancelled),
            Err(e) => error(format!("Skipped {}: {e}", template.file_name)),
        }
    }

    Ok(written)
}
