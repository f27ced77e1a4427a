//! Table rendering utilities for CLI outputs.
//!
//! Cells are left-aligned, padded to the column width and joined by ` | `.

use crate::utils::formatting::{display_width, pad_right, rule};

const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table whose column widths fit the headers and every row:
    /// `max(header width, longest value width)`.
    pub fn fitted(headers: &[String], rows: &[Vec<String>]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let longest = rows
                    .iter()
                    .map(|r| r.get(i).map_or(0, |v| display_width(v)))
                    .max()
                    .unwrap_or(0);
                Column::new(h.clone(), display_width(h).max(longest))
            })
            .collect();

        Self {
            columns,
            rows: rows.to_vec(),
        }
    }

    pub fn header_line(&self) -> String {
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.format_line(headers.as_slice())
    }

    /// Format one row; missing cells render empty.
    pub fn format_line<S: AsRef<str>>(&self, cells: &[S]) -> String {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| pad_right(cells.get(i).map_or("", |c| c.as_ref()), col.width))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    /// Header line followed by a dashed rule as wide as the header.
    pub fn render_header(&self) -> String {
        let header = self.header_line();
        let width = display_width(&header);
        format!("{header}\n{}", rule(width))
    }

    /// Header, rule, every row and a closing rule.
    pub fn render(&self) -> String {
        let header = self.header_line();
        let closing = rule(display_width(&header));

        let mut out = String::new();
        out.push_str(&header);
        out.push('\n');
        out.push_str(&closing);
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.format_line(row.as_slice()));
            out.push('\n');
        }

        out.push_str(&closing);
        out
    }
}
