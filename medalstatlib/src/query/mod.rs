//! Report engine: group, sort, filter and pivot a loaded table.
//!
//! This module handles the second stage of the pipeline - turning a bound
//! `MedalTable` into the result of one menu selection. It provides:
//!
//! - **ReportKind**: the sixteen reports, with menu labels and slugs
//! - **run**: the single entry point, dispatching on the kind
//! - **ReportResult**: the payload shapes a report can produce
//!
//! ## Example
//!
//! ```rust
//! use medalstatlib::data::{MedalTable, Record};
//! use medalstatlib::query::{run, ReportKind, ReportResult};
//!
//! let table = MedalTable::new(vec![
//!     Record::new("A", Some(20), "USA", 2000, "-", "Swimming", 1, 0, 0, 1),
//!     Record::new("B", Some(22), "USA", 2000, "-", "Athletics", 0, 1, 0, 1),
//! ]);
//! let result = run(&table, ReportKind::SportMostMedals).unwrap();
//! assert!(matches!(result, ReportResult::Table(_)));
//! ```

mod groupby;
pub mod kind;
pub mod reports;
pub mod result;

pub use kind::ReportKind;
pub use reports::{is_swimming_sport, run, ONLY_BRONZE_LIMIT, SWIMMING_SPORTS};
pub use result::{
    Cell, Frame, MedalShare, Metric, ReportResult, Series, SeriesPoint, CORRELATION_METRIC,
};
