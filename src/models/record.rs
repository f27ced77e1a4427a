use crate::utils::table::{Column, Table};

/// One column of a record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column label in the session CSV export
    pub label: &'static str,
    /// Column heading of the live echo table
    pub heading: &'static str,
    /// Fixed width of the live echo table
    pub width: usize,
}

/// A fixed-shape student record (attendance, behavior or detention).
///
/// `FIELDS` declares the field order; `values()` must return the values in
/// that same order. Rendering and export are generic over this trait.
pub trait Record {
    /// Section title in the session CSV export
    const SECTION: &'static str;
    const FIELDS: &'static [FieldSpec];

    fn values(&self) -> Vec<&str>;
}

pub fn labels<R: Record>() -> Vec<&'static str> {
    R::FIELDS.iter().map(|f| f.label).collect()
}

/// Empty table with the fixed echo widths of `R`.
pub fn echo_table<R: Record>() -> Table {
    Table::new(
        R::FIELDS
            .iter()
            .map(|f| Column::new(f.heading, f.width))
            .collect(),
    )
}
