pub mod attendance;
pub mod behavior;
pub mod class_info;
pub mod detention;
pub mod record;
pub mod session;
pub mod sheet;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use behavior::BehaviorRecord;
pub use class_info::ClassInfo;
pub use detention::DetentionRecord;
pub use record::Record;
pub use session::Session;
pub use sheet::Sheet;
