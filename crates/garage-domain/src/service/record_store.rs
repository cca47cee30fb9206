//! Closed service records

use garage_types::{Error, ExportError, Result};

use crate::model::ServiceSession;
use crate::sink::{RecordRow, RecordSink, RecordTable};

/// Completed sessions, oldest first
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<ServiceSession>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a closed session. Open sessions are rejected.
    pub fn append(&mut self, session: ServiceSession) -> Result<()> {
        if !session.is_closed() {
            return Err(Error::Validation(format!(
                "session {} is still open",
                session.id
            )));
        }
        self.records.push(session);
        Ok(())
    }

    pub fn list(&self) -> &[ServiceSession] {
        &self.records
    }

    pub fn last(&self) -> Option<&ServiceSession> {
        self.records.last()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tabular projection of every closed record
    pub fn table(&self) -> RecordTable {
        RecordTable {
            rows: self.records.iter().map(RecordRow::closed).collect(),
        }
    }

    /// Hand the records to a sink for writing
    pub fn export(&self, sink: &dyn RecordSink) -> std::result::Result<(), ExportError> {
        if self.records.is_empty() {
            return Err(ExportError::EmptyStore);
        }
        sink.write_table(&self.table())
    }
}
