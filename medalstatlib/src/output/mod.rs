//! Output formatting: present report results as tables.
//!
//! This module handles the final stage of the pipeline - formatting
//! report results for display. It provides:
//!
//! - **ReportTable**: Table-ready data structure with title, sections and notes
//! - **TableSection**: Individual block of headers and formatted rows
//!
//! ReportTable is a pure presentation layer - it only formats data into strings.
//! All grouping, sorting, and filtering happens in the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use medalstatlib::output::ReportTable;
//!
//! let table = ReportTable::from_result(ReportKind::GoldPivot, &result);
//! // table.sections[0].headers: ["Country", "2000", "2004", ...]
//! // table.sections[0].rows: [["USA", "3", "6", ...], ...]
//! ```

pub mod table;

pub use table::{ReportTable, TableSection};
