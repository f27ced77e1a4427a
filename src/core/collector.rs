//! Interactive collection of class info and the three record sections.

use crate::config::Config;
use crate::core::prompt::Console;
use crate::errors::AppResult;
use crate::models::behavior::{default_points, resolve_points};
use crate::models::record::{Record, echo_table};
use crate::models::{AttendanceRecord, BehaviorRecord, ClassInfo, DetentionRecord, Session};
use crate::ui::messages::{BANNER_WIDTH, section_banner};
use crate::utils::date::today_string;
use std::io::{BufRead, Write};
use tracing::debug;

/// Name that ends a section, compared case-insensitively.
pub const SENTINEL: &str = "done";

pub fn is_sentinel(name: &str) -> bool {
    name.eq_ignore_ascii_case(SENTINEL)
}

pub struct Collector<'c, R, W> {
    console: Console<R, W>,
    config: &'c Config,
}

impl<'c, R: BufRead, W: Write> Collector<'c, R, W> {
    pub fn new(console: Console<R, W>, config: &'c Config) -> Self {
        Self { console, config }
    }

    pub fn console(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Class info followed by the attendance, behavior and detention sections.
    pub fn run(&mut self) -> AppResult<Session> {
        let mut session = Session::new(self.class_info()?);

        for record in self.attendance()? {
            session.add_attendance(record);
        }
        for record in self.behavior()? {
            session.add_behavior(record);
        }
        for record in self.detention()? {
            session.add_detention(record);
        }

        Ok(session)
    }

    pub fn class_info(&mut self) -> AppResult<ClassInfo> {
        self.banner("CLASS INFORMATION")?;

        let today = today_string();
        let info = ClassInfo {
            date: self.console.ask_or("Date (YYYY-MM-DD) [Today]: ", &today)?,
            class: self.console.ask("Class/Grade: ")?,
            teacher: self.console.ask("Teacher Name: ")?,
            subject: self.console.ask("Subject/Period: ")?,
        };

        self.console.say("\n✓ Class information saved")?;
        Ok(info)
    }

    pub fn attendance(&mut self) -> AppResult<Vec<AttendanceRecord>> {
        self.banner("STUDENT ATTENDANCE RECORDS")?;
        self.console
            .say("\nEnter student information. Press ENTER after each field:")?;
        self.console.say("Status: P=Present, A=Absent, L=Late, E=Excused")?;
        self.console.say("Time format: HH:MM (e.g., 09:30)")?;
        self.console.say("Type 'done' when finished.\n")?;

        let records = self.section(Self::attendance_fields)?;

        self.console
            .say(format!("\n✓ {} attendance records saved", records.len()))?;
        Ok(records)
    }

    pub fn behavior(&mut self) -> AppResult<Vec<BehaviorRecord>> {
        self.banner("BEHAVIORAL INCIDENTS (Optional)")?;
        self.console
            .say("\nEnter behavioral incidents. Type 'done' when finished.\n")?;
        self.console.say(
            "Incident Types: Disruption, Disrespect, Aggression, Bullying, Dishonesty, Property Damage",
        )?;
        self.console
            .say("Severity: Minor(1), Moderate(2), Serious(3), Critical(4)\n")?;

        let records = self.section(Self::behavior_fields)?;

        if records.is_empty() {
            self.console.say("\n✓ No behavior incidents recorded")?;
        } else {
            self.console
                .say(format!("\n✓ {} behavior records saved", records.len()))?;
        }
        Ok(records)
    }

    pub fn detention(&mut self) -> AppResult<Vec<DetentionRecord>> {
        self.banner("DETENTION ASSIGNMENTS (Optional)")?;
        self.console
            .say("\nEnter detention assignments. Type 'done' when finished.\n")?;
        self.console.say("Duration options: 30min, 1hr, 2hrs, custom")?;
        self.console.say("Date & Time format: YYYY-MM-DD HH:MM\n")?;

        let records = self.section(Self::detention_fields)?;

        if records.is_empty() {
            self.console.say("\n✓ No detention assignments")?;
        } else {
            self.console
                .say(format!("\n✓ {} detention records saved", records.len()))?;
        }
        Ok(records)
    }

    /// Prompt for records until the sentinel is entered as the name.
    /// Each accepted record is echoed as an aligned row.
    fn section<T: Record>(
        &mut self,
        fill: fn(&mut Self, String) -> AppResult<T>,
    ) -> AppResult<Vec<T>> {
        let table = echo_table::<T>();
        self.console.say(table.render_header())?;

        let mut records = Vec::new();
        loop {
            let prompt = format!("\n[{}] Student Name (or 'done'): ", records.len() + 1);
            let name = self.console.ask(&prompt)?;
            if is_sentinel(&name) {
                break;
            }

            let record = fill(self, name)?;
            self.console
                .say(format!("  {}", table.format_line(record.values().as_slice())))?;
            records.push(record);
        }

        debug!(section = T::SECTION, count = records.len(), "section closed");
        Ok(records)
    }

    fn attendance_fields(&mut self, name: String) -> AppResult<AttendanceRecord> {
        let status = self.console.ask("  Status (P/A/L/E): ")?.to_uppercase();
        let default_time = self.config.default_time.clone();
        let time = self
            .console
            .ask_or(&format!("  Time (HH:MM) [{default_time}]: "), &default_time)?;
        let notes = self.console.ask("  Notes: ")?;

        Ok(AttendanceRecord::new(name, status, time, notes))
    }

    fn behavior_fields(&mut self, name: String) -> AppResult<BehaviorRecord> {
        let incident = self.console.ask("  Incident Type: ")?;
        let severity = self.console.ask("  Severity (1-4): ")?;
        let points = self.points(&severity)?;

        Ok(BehaviorRecord::new(name, incident, severity, points))
    }

    /// Blank points default to `severity * points_per_severity`. When the
    /// severity is not a number there is no default, so ask again until the
    /// operator types the points explicitly.
    fn points(&mut self, severity: &str) -> AppResult<String> {
        let per = self.config.points_per_severity;
        let prompt = match default_points(severity, per) {
            Ok(p) => format!("  Points [{p}]: "),
            Err(_) => "  Points: ".to_string(),
        };

        loop {
            let input = self.console.ask(&prompt)?;
            match resolve_points(&input, severity, per) {
                Ok(points) => return Ok(points),
                Err(e) => {
                    self.console
                        .say(format!("  ⚠️ {e}; enter the points explicitly"))?;
                }
            }
        }
    }

    fn detention_fields(&mut self, name: String) -> AppResult<DetentionRecord> {
        let reason = self.console.ask("  Reason: ")?;
        let duration = self.console.ask("  Duration: ")?;
        let datetime = self.console.ask("  Date & Time (YYYY-MM-DD HH:MM): ")?;

        Ok(DetentionRecord::new(name, reason, duration, datetime))
    }

    fn banner(&mut self, title: &str) -> AppResult<()> {
        self.console.say(section_banner(title, BANNER_WIDTH))
    }
}
