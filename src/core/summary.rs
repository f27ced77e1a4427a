//! End-of-session report. Pure function of the session; nothing is mutated.

use crate::models::{AttendanceRecord, AttendanceStatus, Session};
use crate::ui::messages::{BANNER_WIDTH, section_banner};
use std::fmt::Write;

/// Attendance status counts. `other` holds statuses that match no code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceTally {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub excused: usize,
    pub other: usize,
}

impl AttendanceTally {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut tally, r| {
                match r.status_code() {
                    Some(AttendanceStatus::Present) => tally.present += 1,
                    Some(AttendanceStatus::Absent) => tally.absent += 1,
                    Some(AttendanceStatus::Late) => tally.late += 1,
                    Some(AttendanceStatus::Excused) => tally.excused += 1,
                    None => tally.other += 1,
                }
                tally
            })
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Late => self.late,
            AttendanceStatus::Excused => self.excused,
        }
    }

    pub fn total(&self) -> usize {
        self.present + self.absent + self.late + self.excused + self.other
    }
}

#[derive(Debug, Clone)]
pub struct Summary<'a> {
    session: &'a Session,
    pub tally: AttendanceTally,
}

impl<'a> Summary<'a> {
    pub fn of(session: &'a Session) -> Self {
        Self {
            session,
            tally: AttendanceTally::from_records(session.attendance()),
        }
    }

    pub fn render(&self) -> String {
        let info = &self.session.class_info;
        let mut out = section_banner("SUMMARY", BANNER_WIDTH);
        out.push('\n');

        // writeln! into a String cannot fail
        let _ = writeln!(out, "\nClass Information:");
        let _ = writeln!(out, "  Date: {}", or_na(&info.date));
        let _ = writeln!(out, "  Class: {}", or_na(&info.class));
        let _ = writeln!(out, "  Teacher: {}", or_na(&info.teacher));
        let _ = writeln!(out, "  Subject: {}", or_na(&info.subject));

        let _ = writeln!(out, "\nAttendance Summary:");
        let _ = writeln!(out, "  Total Students: {}", self.session.attendance().len());
        for status in AttendanceStatus::ALL {
            let _ = writeln!(out, "  {}: {}", status.label(), self.tally.count(status));
        }
        if self.tally.other > 0 {
            let _ = writeln!(out, "  Other: {}", self.tally.other);
        }

        let _ = writeln!(out, "\nBehavioral Summary:");
        let _ = writeln!(out, "  Incidents Recorded: {}", self.session.behavior().len());

        let _ = writeln!(out, "\nDetention Summary:");
        let _ = writeln!(out, "  Detentions Assigned: {}", self.session.detention().len());

        let _ = write!(out, "\n{}", "=".repeat(BANNER_WIDTH));
        out
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}
