use super::record::{FieldSpec, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetentionRecord {
    pub name: String,
    pub reason: String,
    pub duration: String,
    /// `YYYY-MM-DD HH:MM` by convention; stored unparsed
    pub datetime: String,
}

impl DetentionRecord {
    pub fn new(
        name: impl Into<String>,
        reason: impl Into<String>,
        duration: impl Into<String>,
        datetime: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            duration: duration.into(),
            datetime: datetime.into(),
        }
    }
}

impl Record for DetentionRecord {
    const SECTION: &'static str = "DETENTION ASSIGNMENTS";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            label: "Student Name",
            heading: "STUDENT NAME",
            width: 20,
        },
        FieldSpec {
            label: "Reason",
            heading: "REASON",
            width: 20,
        },
        FieldSpec {
            label: "Duration",
            heading: "DURATION",
            width: 12,
        },
        FieldSpec {
            label: "Date & Time",
            heading: "DATE & TIME",
            width: 20,
        },
    ];

    fn values(&self) -> Vec<&str> {
        vec![&self.name, &self.reason, &self.duration, &self.datetime]
    }
}
