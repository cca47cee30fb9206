//! Domain services

pub mod profile;
pub mod record_store;
pub mod registry;
pub mod tracker;

pub use profile::{profile, KindProfile};
pub use record_store::RecordStore;
pub use registry::VehicleRegistry;
pub use tracker::ServiceTracker;
