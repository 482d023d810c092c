//! The bound medal table.

use serde::{Deserialize, Serialize};

use super::record::{Column, Record};

/// An in-memory table of medal records with the fixed ten-column schema.
///
/// Tables are built once per upload and never mutated afterwards; every
/// report borrows it immutably.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTable {
    records: Vec<Record>,
}

impl MedalTable {
    pub fn new(records: Vec<Record>) -> Self {
        MedalTable { records }
    }

    /// Column schema, identical for every table.
    pub fn columns(&self) -> &'static [Column; 10] {
        &Column::ALL
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` records in table order.
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for MedalTable {
    fn from(records: Vec<Record>) -> Self {
        MedalTable::new(records)
    }
}

impl<'a> IntoIterator for &'a MedalTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
