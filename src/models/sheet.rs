use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Records loaded from a tab-separated file.
///
/// Every row has exactly one value per header, so each row reads as a
/// header→value mapping in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row; short rows are padded with empty values and surplus
    /// values are dropped. Returns how many values were dropped.
    pub fn push_row(&mut self, mut values: Vec<String>) -> usize {
        let width = self.headers.len();
        let dropped = values.len().saturating_sub(width);
        values.resize(width, String::new());
        self.rows.push(values);
        dropped
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of column `key` in row `index`.
    pub fn get(&self, index: usize, key: &str) -> Option<&str> {
        let col = self.headers.iter().position(|h| h == key)?;
        self.rows.get(index).map(|r| r[col].as_str())
    }

    pub fn records(&self) -> impl Iterator<Item = SheetRecord<'_>> {
        self.rows.iter().map(|values| SheetRecord {
            headers: &self.headers,
            values,
        })
    }
}

/// Borrowed view of one row as an ordered mapping.
#[derive(Debug, Clone, Copy)]
pub struct SheetRecord<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> SheetRecord<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.headers
            .iter()
            .zip(self.values)
            .map(|(h, v)| (h.as_str(), v.as_str()))
    }
}

impl Serialize for SheetRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A sheet serializes as an array of objects, keys in header order.
impl Serialize for Sheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for record in self.records() {
            seq.serialize_element(&record)?;
        }
        seq.end()
    }
}
