//! Tabular projection of service records and the sink trait writers implement

use serde::Serialize;

use garage_types::ExportError;

use crate::model::ServiceSession;

/// Column headers, in output order
pub const RECORD_HEADERS: [&str; 7] = [
    "ID",
    "Vehicle",
    "License",
    "Start",
    "End",
    "Duration",
    "Fuel Efficiency",
];

/// One displayable/exportable row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordRow {
    pub id: String,
    /// "{Kind} - {name}"
    pub vehicle: String,
    pub license: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub fuel_efficiency: String,
    /// Row describes the session still open
    #[serde(skip)]
    pub in_progress: bool,
}

impl RecordRow {
    /// Row for an archived session
    pub fn closed(session: &ServiceSession) -> Self {
        Self {
            id: session.id.clone(),
            vehicle: session.vehicle.display_name(),
            license: session.vehicle.license.clone(),
            start: session.start_label(),
            end: session.end_label().unwrap_or_default(),
            duration: session.duration_label().unwrap_or_default(),
            fuel_efficiency: session
                .fuel_efficiency
                .map_or("N/A".to_string(), |fe| fe.to_string()),
            in_progress: false,
        }
    }

    /// Row for the session currently open
    pub fn in_progress(session: &ServiceSession) -> Self {
        Self {
            id: session.id.clone(),
            vehicle: session.vehicle.display_name(),
            license: session.vehicle.license.clone(),
            start: session.start_label(),
            end: "In Progress".to_string(),
            duration: "N/A".to_string(),
            fuel_efficiency: session
                .fuel_efficiency
                .map_or("Not Checked".to_string(), |fe| fe.to_string()),
            in_progress: true,
        }
    }

    pub fn cells(&self) -> [&str; 7] {
        [
            &self.id,
            &self.vehicle,
            &self.license,
            &self.start,
            &self.end,
            &self.duration,
            &self.fuel_efficiency,
        ]
    }
}

/// Rows handed to a sink
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordTable {
    pub rows: Vec<RecordRow>,
}

impl RecordTable {
    pub fn headers(&self) -> [&'static str; 7] {
        RECORD_HEADERS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Destination that serializes a record table (file writers live in infra)
pub trait RecordSink {
    fn write_table(&self, table: &RecordTable) -> Result<(), ExportError>;
}
