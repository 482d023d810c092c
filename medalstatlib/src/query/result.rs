//! Report payloads.
//!
//! A report produces one of a handful of shapes: a plain table, a
//! chart-ready series, a pair of scalar metrics, medal shares, the
//! youngest/oldest pair of tables, or a truncated sample with its true
//! row count. All of them serialize to JSON for external renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Int(i64::from(value))
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(i64::from(value))
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<Option<u32>> for Cell {
    fn from(value: Option<u32>) -> Self {
        value.map(Cell::from).unwrap_or(Cell::Null)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{:.2}", v),
            Cell::Text(v) => f.write_str(v),
            Cell::Null => f.write_str("-"),
        }
    }
}

/// A table with named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Frame {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Frame {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; callers keep the width equal to `columns`.
    pub fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (`row`, `column name`), if present.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx)
    }
}

/// Ordered category/value pairs, ready for a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Name of the category axis (e.g. "Year")
    pub category: String,
    /// Name of the value axis (e.g. "Total")
    pub value: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub category: Cell,
    pub value: u64,
}

/// Metric name of the age/total Pearson coefficient.
pub const CORRELATION_METRIC: &str = "Correlation Coefficient";

/// A named scalar; `None` when it cannot be computed from the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: Option<f64>,
    /// Decimal places used for display
    pub precision: usize,
}

/// Medal counts and their share of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedalShare {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
    pub gold_pct: f64,
    pub silver_pct: f64,
    pub bronze_pct: f64,
}

impl MedalShare {
    pub fn total(&self) -> u64 {
        self.gold + self.silver + self.bronze
    }

    /// (medal name, count, percentage) in Gold/Silver/Bronze order.
    pub fn entries(&self) -> [(&'static str, u64, f64); 3] {
        [
            ("Gold", self.gold, self.gold_pct),
            ("Silver", self.silver, self.silver_pct),
            ("Bronze", self.bronze, self.bronze_pct),
        ]
    }
}

/// Output of a single report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ReportResult {
    Table(Frame),
    Series(Series),
    Metrics { metrics: Vec<Metric> },
    Share(MedalShare),
    Extremes { youngest: Frame, oldest: Frame },
    Sample { rows: Frame, total: usize },
}

impl ReportResult {
    /// Number of data rows carried by the payload.
    pub fn row_count(&self) -> usize {
        match self {
            ReportResult::Table(frame) => frame.len(),
            ReportResult::Series(series) => series.points.len(),
            ReportResult::Metrics { metrics } => metrics.len(),
            ReportResult::Share(_) => 3,
            ReportResult::Extremes { youngest, oldest } => youngest.len() + oldest.len(),
            ReportResult::Sample { rows, .. } => rows.len(),
        }
    }
}
