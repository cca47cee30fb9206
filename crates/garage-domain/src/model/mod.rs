//! Domain model types

pub mod session;
pub mod vehicle;

pub use session::{format_duration, ServiceSession, VehicleSummary};
pub use vehicle::Vehicle;

/// Timestamp layout used for session start/end columns
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layout used for vehicle registration times
pub const REGISTERED_FORMAT: &str = "%Y-%m-%d %H:%M";
