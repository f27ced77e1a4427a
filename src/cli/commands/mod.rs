pub mod entry;
pub mod sheet;
