//! Application use cases

pub mod export_service;

pub use export_service::{default_export_path, export_records, resolve_destination};
