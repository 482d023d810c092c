//! Error types for medalstatlib

use std::path::PathBuf;
use thiserror::Error;

/// Remediation hint shown alongside any ingestion failure.
pub const PARSE_HINT: &str = "Please ensure your file is tab-separated, has no header row, \
and has exactly 10 columns in this order: Athlete, Age, Country, Year, Date, Sport, \
Gold, Silver, Bronze, Total.";

/// Errors that can occur while loading medal data or computing reports
#[derive(Error, Debug)]
pub enum MedalstatError {
    /// A line did not split into exactly ten fields
    #[error("line {line}: expected 10 columns, found {found}")]
    ColumnCount { line: u64, found: usize },

    /// A numeric column held text that is not a non-negative integer
    #[error("line {line}: column '{column}' value '{value}' is not a non-negative integer")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// Malformed delimited text (bad quoting, invalid UTF-8)
    #[error("malformed input: {0}")]
    Csv(String),

    /// The upload contained no data lines
    #[error("no data rows found in input")]
    EmptyInput,

    /// Failed to read the input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A report could not be computed for the loaded table
    #[error("could not compute report: {0}")]
    Computation(String),

    /// A report was requested before any table was loaded
    #[error("no dataset loaded; upload a medal file first")]
    NoDataset,

    /// A report identifier did not match any known kind
    #[error("unknown report '{0}'")]
    UnknownReport(String),
}

impl MedalstatError {
    /// True for failures raised while ingesting an upload.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            MedalstatError::ColumnCount { .. }
                | MedalstatError::InvalidNumber { .. }
                | MedalstatError::Csv(_)
                | MedalstatError::EmptyInput
                | MedalstatError::FileRead { .. }
        )
    }

    /// Fixed remediation hint for ingestion failures.
    pub fn hint(&self) -> Option<&'static str> {
        self.is_parse_error().then_some(PARSE_HINT)
    }
}

impl From<csv::Error> for MedalstatError {
    fn from(err: csv::Error) -> Self {
        MedalstatError::Csv(err.to_string())
    }
}
