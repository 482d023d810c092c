//! Caller-owned holder for the currently loaded table.
//!
//! A `Session` keeps at most one `MedalTable`. Uploading replaces it
//! wholesale; a failed upload leaves the session empty, so a stale table is
//! never reported on after a bad file.

use log::warn;

use crate::data::MedalTable;
use crate::error::MedalstatError;
use crate::ingest::{parse_reader, LoadOptions};
use crate::query::{run, ReportKind, ReportResult};
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct Session {
    options: LoadOptions,
    table: Option<MedalTable>,
}

impl Session {
    pub fn new(options: LoadOptions) -> Self {
        Session {
            options,
            table: None,
        }
    }

    /// Parse an upload and make it the current table.
    pub fn upload(&mut self, bytes: &[u8]) -> Result<&MedalTable> {
        self.table = None;
        let table = parse_reader(bytes, &self.options)?;
        Ok(self.table.insert(table))
    }

    pub fn table(&self) -> Option<&MedalTable> {
        self.table.as_ref()
    }

    /// Run a report against the current table.
    ///
    /// A failure affects only this selection; the table stays loaded.
    pub fn report(&self, kind: ReportKind) -> Result<ReportResult> {
        let table = self.table.as_ref().ok_or(MedalstatError::NoDataset)?;
        run(table, kind).inspect_err(|e| warn!("report '{}' failed: {}", kind.slug(), e))
    }

    /// Drop the current table.
    pub fn clear(&mut self) {
        self.table = None;
    }
}
