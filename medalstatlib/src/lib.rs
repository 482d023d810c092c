//! # medalstatlib
//!
//! Load a file of Olympic medal records and compute a fixed menu of
//! aggregate reports over it.
//!
//! ## Overview
//!
//! Medal files are tab-separated with no header row and exactly ten
//! columns, bound by position:
//!
//! `Athlete, Age, Country, Year, Date, Sport, Gold, Silver, Bronze, Total`
//!
//! The pipeline has three stages:
//!
//! - **Ingest**: parse the text into an immutable `MedalTable`
//! - **Query**: run one of sixteen `ReportKind`s to get a `ReportResult`
//! - **Output**: turn a result into a display-ready `ReportTable`
//!
//! A `Session` holds the currently loaded table for callers that upload
//! and report repeatedly.
//!
//! ## Features
//!
//! - **All-or-nothing ingestion**: a bad line fails the whole upload with a
//!   line-numbered error and a remediation hint
//! - **Deterministic reports**: stable tie-breaking, no hidden state
//! - **Pure Rust data types**: results serialize to JSON, no I/O side effects
//!
//! ## Example
//!
//! ```rust
//! use medalstatlib::{parse_str, run, LoadOptions, ReportKind, ReportTable};
//!
//! let text = "A\t20\tUSA\t2000\t-\tSwimming\t1\t0\t0\t1\n\
//!             B\t22\tUSA\t2000\t-\tAthletics\t0\t1\t0\t1\n";
//! let table = parse_str(text, &LoadOptions::default()).unwrap();
//!
//! let result = run(&table, ReportKind::MostGold).unwrap();
//! let display = ReportTable::from_result(ReportKind::MostGold, &result);
//! assert_eq!(display.sections[0].rows[0][0], "A");
//!
//! // Every kind in the menu can be run against the same table
//! for kind in ReportKind::ALL {
//!     assert!(run(&table, kind).is_ok());
//! }
//! ```

pub mod data;
pub mod error;
pub mod ingest;
pub mod output;
pub mod query;
pub mod session;

pub use data::{Column, MedalTable, Record};
pub use error::{MedalstatError, PARSE_HINT};
pub use ingest::{load_file, parse_reader, parse_str, LoadOptions};
pub use output::{ReportTable, TableSection};
pub use query::{run, Cell, Frame, MedalShare, Metric, ReportKind, ReportResult, Series};
pub use session::Session;

/// Result type for medalstatlib operations
pub type Result<T> = std::result::Result<T, MedalstatError>;
