//! Record file writers

pub mod csv_writer;
pub mod excel;

use std::path::Path;

use garage_domain::RecordSink;
use garage_types::ExportFormat;

pub use csv_writer::{write_csv, CsvRecordSink};
pub use excel::XlsxRecordSink;

/// Build the writer for a destination path in the given format
pub fn file_sink(path: &Path, format: ExportFormat) -> Box<dyn RecordSink> {
    match format {
        ExportFormat::Csv => Box::new(CsvRecordSink::new(path)),
        ExportFormat::Xlsx => Box::new(XlsxRecordSink::new(path)),
    }
}
