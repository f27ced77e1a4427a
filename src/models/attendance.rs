use super::record::{FieldSpec, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub name: String,
    /// Raw status as entered (upper-cased), not necessarily a known code
    pub status: String,
    pub time: String,
    pub notes: String,
}

impl AttendanceRecord {
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        time: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            time: time.into(),
            notes: notes.into(),
        }
    }

    /// Known status code, if the stored status is exactly one.
    pub fn status_code(&self) -> Option<AttendanceStatus> {
        AttendanceStatus::from_code(&self.status)
    }
}

impl Record for AttendanceRecord {
    const SECTION: &'static str = "ATTENDANCE RECORDS";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            label: "Student Name",
            heading: "STUDENT NAME",
            width: 20,
        },
        FieldSpec {
            label: "Status",
            heading: "STATUS",
            width: 10,
        },
        FieldSpec {
            label: "Time",
            heading: "TIME",
            width: 10,
        },
        FieldSpec {
            label: "Notes",
            heading: "NOTES",
            width: 30,
        },
    ];

    fn values(&self) -> Vec<&str> {
        vec![&self.name, &self.status, &self.time, &self.notes]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Present, // P
    Absent,  // A
    Late,    // L
    Excused, // E
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::Excused,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
            AttendanceStatus::Late => "L",
            AttendanceStatus::Excused => "E",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Excused => "Excused",
        }
    }

    /// Exact, case-sensitive match on the code.
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "P" => Some(AttendanceStatus::Present),
            "A" => Some(AttendanceStatus::Absent),
            "L" => Some(AttendanceStatus::Late),
            "E" => Some(AttendanceStatus::Excused),
            _ => None,
        }
    }
}
