/// Session-level metadata shared by every record of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassInfo {
    pub date: String,
    pub class: String,
    pub teacher: String,
    pub subject: String,
}

impl ClassInfo {
    pub const LABELS: [&'static str; 4] = ["Date", "Class", "Teacher", "Subject"];

    pub fn values(&self) -> [&str; 4] {
        [&self.date, &self.class, &self.teacher, &self.subject]
    }
}
