//! Table-ready data structures for report output.
//!
//! This module provides `ReportTable`, a presentation-ready data structure
//! that can be directly consumed by templates or serialized to JSON.
//!
//! The data flow is:
//! 1. Bound data (MedalTable)
//! 2. ReportResult (grouped, sorted, filtered)
//! 3. ReportTable (formatted strings for display)
//!
//! ReportTable is a pure presentation layer - it only formats data, no
//! aggregation. All computation happens in the query layer.

use serde::{Deserialize, Serialize};

use crate::data::{Column, MedalTable};
use crate::query::{
    Frame, MedalShare, Metric, ReportKind, ReportResult, Series, CORRELATION_METRIC,
};

/// One titled block of rows within a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSection {
    /// Optional sub-heading (e.g., "Youngest Medal Winner(s)")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Column headers
    pub headers: Vec<String>,
    /// Rows of display strings, one per header
    pub rows: Vec<Vec<String>>,
}

/// Table-ready report data.
///
/// This is the final data structure before presentation. Templates
/// iterate over sections and notes and apply formatting - no computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Report heading
    pub title: String,
    pub sections: Vec<TableSection>,
    /// Informational lines shown below the sections
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

impl ReportTable {
    /// Format a report result for display.
    pub fn from_result(kind: ReportKind, result: &ReportResult) -> Self {
        let mut notes = Vec::new();

        let sections = match result {
            ReportResult::Table(frame) => {
                if kind == ReportKind::MedalsByCountrySport {
                    notes.push(
                        "This can be a large table. Displaying the full grouped data.".to_string(),
                    );
                }
                vec![frame_section(None, frame)]
            }
            ReportResult::Series(series) => vec![series_section(series)],
            ReportResult::Metrics { metrics } => {
                if let Some(note) = metrics
                    .iter()
                    .find(|m| m.name == CORRELATION_METRIC)
                    .map(correlation_note)
                {
                    notes.push(note);
                }
                vec![metrics_section(metrics)]
            }
            ReportResult::Share(share) => share_sections(share),
            ReportResult::Extremes { youngest, oldest } => vec![
                frame_section(Some("Youngest Medal Winner(s)"), youngest),
                frame_section(Some("Oldest Medal Winner(s)"), oldest),
            ],
            ReportResult::Sample { rows, total } => {
                notes.push(format!(
                    "Showing first {} of {} athletes who fit this criteria.",
                    rows.len(),
                    total
                ));
                vec![frame_section(None, rows)]
            }
        };

        ReportTable {
            title: kind.title().to_string(),
            sections,
            notes,
        }
    }

    /// Raw data preview: the first `rows` records with all ten columns.
    pub fn preview(table: &MedalTable, rows: usize) -> Self {
        let shown = table.head(rows);
        let section = TableSection {
            heading: None,
            headers: Column::ALL.iter().map(|c| c.name().to_string()).collect(),
            rows: shown
                .iter()
                .map(|record| Column::ALL.iter().map(|c| record.field(*c)).collect())
                .collect(),
        };

        ReportTable {
            title: format!("Raw Olympic Data (Top {} Rows)", shown.len()),
            sections: vec![section],
            notes: vec![format!("{} records loaded.", table.len())],
        }
    }
}

fn frame_section(heading: Option<&str>, frame: &Frame) -> TableSection {
    TableSection {
        heading: heading.map(str::to_string),
        headers: frame.columns.clone(),
        rows: frame
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    }
}

fn series_section(series: &Series) -> TableSection {
    TableSection {
        heading: Some("Chart data".to_string()),
        headers: vec![series.category.clone(), series.value.clone()],
        rows: series
            .points
            .iter()
            .map(|p| vec![p.category.to_string(), p.value.to_string()])
            .collect(),
    }
}

fn format_metric(metric: &Metric) -> String {
    match metric.value {
        Some(v) => format!("{:.*}", metric.precision, v),
        None => "undefined".to_string(),
    }
}

fn metrics_section(metrics: &[Metric]) -> TableSection {
    TableSection {
        heading: None,
        headers: vec!["Metric".to_string(), "Value".to_string()],
        rows: metrics
            .iter()
            .map(|m| vec![m.name.clone(), format_metric(m)])
            .collect(),
    }
}

/// Describe how strong a correlation coefficient is.
fn correlation_strength(r: f64) -> &'static str {
    match r.abs() {
        a if a < 0.1 => "negligible",
        a if a < 0.3 => "very weak",
        a if a < 0.5 => "moderate",
        _ => "strong",
    }
}

fn correlation_note(metric: &Metric) -> String {
    match metric.value {
        Some(r) => format!(
            "A coefficient of {:.4} indicates a {} linear relationship between age and total medals won.",
            r,
            correlation_strength(r)
        ),
        None => "Correlation is undefined: fewer than two rows with a known age, \
                 or no variation in age or total medals."
            .to_string(),
    }
}

fn share_sections(share: &MedalShare) -> Vec<TableSection> {
    let entries = share.entries();
    vec![
        TableSection {
            heading: None,
            headers: vec!["Medal".to_string(), "Percentage".to_string()],
            rows: entries
                .iter()
                .map(|(name, _, pct)| vec![name.to_string(), format!("{:.2}", pct)])
                .collect(),
        },
        TableSection {
            heading: Some("Medal Distribution".to_string()),
            headers: vec!["Medal Type".to_string(), "Count".to_string()],
            rows: entries
                .iter()
                .map(|(name, count, _)| vec![name.to_string(), count.to_string()])
                .collect(),
        },
    ]
}
