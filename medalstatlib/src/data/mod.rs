//! Data model: medal records and the bound table.
//!
//! This module holds the types produced by ingestion and consumed by the
//! report engine:
//!
//! - **Column**: the ten fixed column names, in positional order
//! - **Record**: one row of medal data
//! - **MedalTable**: the immutable, ordered collection of records
//!
//! ## Example
//!
//! ```rust
//! use medalstatlib::data::{MedalTable, Record};
//!
//! let table = MedalTable::new(vec![Record::new(
//!     "A", Some(20), "USA", 2000, "-", "Swimming", 1, 0, 0, 1,
//! )]);
//! assert_eq!(table.len(), 1);
//! ```

pub mod record;
pub mod table;

pub use record::{Column, Record};
pub use table::MedalTable;
