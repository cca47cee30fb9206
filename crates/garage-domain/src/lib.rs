//! Garage domain: vehicle registry, service session tracking and the record
//! store, plus the sink seam used by exporters.

pub mod garage;
pub mod model;
pub mod service;
pub mod sink;

pub use garage::Garage;
pub use model::{ServiceSession, Vehicle, VehicleSummary};
pub use sink::{RecordRow, RecordSink, RecordTable, RECORD_HEADERS};
