//! Infrastructure layer - record file writers

pub mod export;

pub use export::{file_sink, CsvRecordSink, XlsxRecordSink};
