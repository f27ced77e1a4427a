pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::pad_right;
pub use table::{Column, Table};
