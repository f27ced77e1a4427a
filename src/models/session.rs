use super::attendance::AttendanceRecord;
use super::behavior::BehaviorRecord;
use super::class_info::ClassInfo;
use super::detention::DetentionRecord;

/// Everything collected during one interactive run.
///
/// Record lists are append-only: there is no way to edit or remove a record
/// once it has been accepted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub class_info: ClassInfo,
    attendance: Vec<AttendanceRecord>,
    behavior: Vec<BehaviorRecord>,
    detention: Vec<DetentionRecord>,
}

impl Session {
    pub fn new(class_info: ClassInfo) -> Self {
        Self {
            class_info,
            ..Self::default()
        }
    }

    pub fn add_attendance(&mut self, record: AttendanceRecord) {
        self.attendance.push(record);
    }

    pub fn add_behavior(&mut self, record: BehaviorRecord) {
        self.behavior.push(record);
    }

    pub fn add_detention(&mut self, record: DetentionRecord) {
        self.detention.push(record);
    }

    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    pub fn behavior(&self) -> &[BehaviorRecord] {
        &self.behavior
    }

    pub fn detention(&self) -> &[DetentionRecord] {
        &self.detention
    }
}
