//! Core record types: one row of medal data and the fixed column schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten columns of a medal file, in positional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Athlete,
    Age,
    Country,
    Year,
    Date,
    Sport,
    Gold,
    Silver,
    Bronze,
    Total,
}

impl Column {
    /// All columns in the order they appear in an input line.
    pub const ALL: [Column; 10] = [
        Column::Athlete,
        Column::Age,
        Column::Country,
        Column::Year,
        Column::Date,
        Column::Sport,
        Column::Gold,
        Column::Silver,
        Column::Bronze,
        Column::Total,
    ];

    /// Header name used when displaying this column.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Athlete => "Athlete",
            Column::Age => "Age",
            Column::Country => "Country",
            Column::Year => "Year",
            Column::Date => "Date",
            Column::Sport => "Sport",
            Column::Gold => "Gold",
            Column::Silver => "Silver",
            Column::Bronze => "Bronze",
            Column::Total => "Total",
        }
    }

    /// Zero-based field position within a line.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One medal record.
///
/// `total` is taken from the input as-is; it is expected to equal
/// `gold + silver + bronze` but nothing relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub athlete: String,
    /// Missing ages are kept as `None` and skipped by age statistics
    pub age: Option<u32>,
    pub country: String,
    pub year: i32,
    /// Ceremony date, kept verbatim
    pub date: String,
    pub sport: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl Record {
    /// Builder-style constructor used mostly by tests and callers that
    /// assemble tables in code.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        athlete: impl Into<String>,
        age: Option<u32>,
        country: impl Into<String>,
        year: i32,
        date: impl Into<String>,
        sport: impl Into<String>,
        gold: u32,
        silver: u32,
        bronze: u32,
        total: u32,
    ) -> Self {
        Record {
            athlete: athlete.into(),
            age,
            country: country.into(),
            year,
            date: date.into(),
            sport: sport.into(),
            gold,
            silver,
            bronze,
            total,
        }
    }

    /// Value of the given column rendered as display text.
    pub fn field(&self, column: Column) -> String {
        match column {
            Column::Athlete => self.athlete.clone(),
            Column::Age => self.age.map(|a| a.to_string()).unwrap_or_default(),
            Column::Country => self.country.clone(),
            Column::Year => self.year.to_string(),
            Column::Date => self.date.clone(),
            Column::Sport => self.sport.clone(),
            Column::Gold => self.gold.to_string(),
            Column::Silver => self.silver.to_string(),
            Column::Bronze => self.bronze.to_string(),
            Column::Total => self.total.to_string(),
        }
    }
}
