pub mod collector;
pub mod formatter;
pub mod prompt;
pub mod summary;

pub use collector::Collector;
pub use formatter::render_sheet;
pub use prompt::Console;
pub use summary::{AttendanceTally, Summary};
