//! CSV export of service records

use std::io::Write;
use std::path::{Path, PathBuf};

use garage_domain::{RecordSink, RecordTable};
use garage_types::ExportError;

/// Writes records as comma-separated values with a header row
pub struct CsvRecordSink {
    path: PathBuf,
}

impl CsvRecordSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Serialize a table to any writer
pub fn write_csv<W: Write>(table: &RecordTable, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.headers())?;
    for row in &table.rows {
        wtr.write_record(row.cells())?;
    }
    wtr.flush()?;
    Ok(())
}

impl RecordSink for CsvRecordSink {
    fn write_table(&self, table: &RecordTable) -> Result<(), ExportError> {
        let file = std::fs::File::create(&self.path)
            .map_err(|e| ExportError::io_failure(&self.path, e))?;
        write_csv(table, file).map_err(|e| ExportError::io_failure(&self.path, e))?;

        log::info!("Wrote {} rows to {}", table.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_domain::RecordRow;

    fn row(id: &str, vehicle: &str) -> RecordRow {
        RecordRow {
            id: id.to_string(),
            vehicle: vehicle.to_string(),
            license: "XYZ123".to_string(),
            start: "2024-01-01 10:00:00".to_string(),
            end: "2024-01-01 10:05:00".to_string(),
            duration: "0:05:00".to_string(),
            fuel_efficiency: "N/A".to_string(),
            in_progress: false,
        }
    }

    #[test]
    fn test_write_csv_header_and_quoting() {
        let table = RecordTable {
            rows: vec![row("S001", "Car - Mustang"), row("S002", "Car - Skyline, R34")],
        };
        let mut buf = Vec::new();
        write_csv(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "ID,Vehicle,License,Start,End,Duration,Fuel Efficiency"
        );
        assert_eq!(
            lines[1],
            "S001,Car - Mustang,XYZ123,2024-01-01 10:00:00,2024-01-01 10:05:00,0:05:00,N/A"
        );
        assert!(lines[2].starts_with("S002,\"Car - Skyline, R34\","));
        assert_eq!(lines.len(), 3);
    }
}
