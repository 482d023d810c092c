//! Ingestion: turn an uploaded medal file into a bound table.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Loading**: `load_file`, `parse_str`, `parse_reader`
//! - **Options**: `LoadOptions` (delimiter, preview size)
//!
//! ## Example
//!
//! ```rust
//! use medalstatlib::ingest::{parse_str, LoadOptions};
//!
//! let text = "A\t20\tUSA\t2000\t-\tSwimming\t1\t0\t0\t1\n";
//! let table = parse_str(text, &LoadOptions::default()).unwrap();
//! assert_eq!(table.records()[0].country, "USA");
//! ```

pub mod loader;
pub mod options;

pub use loader::{load_file, parse_reader, parse_str};
pub use options::{LoadOptions, DEFAULT_PREVIEW_ROWS};
