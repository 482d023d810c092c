//! Input options for loading medal files.

use serde::{Deserialize, Serialize};

/// Default number of rows shown in the raw data preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Options controlling how a medal file is read.
///
/// Medal files are headerless and tab-separated. The delimiter can be
/// overridden for files exported with another separator; the column
/// count and order are fixed regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Number of rows in the raw data preview
    pub preview_rows: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl LoadOptions {
    /// Create options with defaults (tab delimiter, five preview rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the field delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder: set the preview row count
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }
}
