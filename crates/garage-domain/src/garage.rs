//! Garage facade owning the registry, the tracker and the record store

use chrono::{DateTime, Local};
use rand::Rng;

use garage_types::{ExportError, FuelEfficiency, Result, VehicleKind};

use crate::model::{ServiceSession, Vehicle};
use crate::service::{RecordStore, ServiceTracker, VehicleRegistry};
use crate::sink::{RecordRow, RecordSink};

/// All in-memory garage state. The presentation layer holds one of these and
/// drives it through the methods below.
#[derive(Debug, Default)]
pub struct Garage {
    registry: VehicleRegistry,
    tracker: ServiceTracker,
    records: RecordStore,
}

impl Garage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_vehicle(
        &mut self,
        kind: VehicleKind,
        name: &str,
        license: &str,
        owner: &str,
    ) -> Result<&Vehicle> {
        self.registry.register(kind, name, license, owner)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.registry.list()
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &VehicleRegistry {
        &self.registry
    }

    pub fn start_service(&mut self, vehicle_id: &str) -> Result<&ServiceSession> {
        self.start_service_at(vehicle_id, Local::now())
    }

    pub fn start_service_at(
        &mut self,
        vehicle_id: &str,
        started_at: DateTime<Local>,
    ) -> Result<&ServiceSession> {
        self.tracker
            .start_at(&mut self.registry, vehicle_id, started_at)
    }

    pub fn sample_fuel_efficiency(&mut self) -> Result<FuelEfficiency> {
        self.tracker.sample_fuel_efficiency()
    }

    pub fn sample_fuel_efficiency_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<FuelEfficiency> {
        self.tracker.sample_fuel_efficiency_with(rng)
    }

    pub fn stop_service(&mut self) -> Result<ServiceSession> {
        self.stop_service_at(Local::now())
    }

    pub fn stop_service_at(&mut self, ended_at: DateTime<Local>) -> Result<ServiceSession> {
        self.tracker
            .stop_at(&mut self.registry, &mut self.records, ended_at)
    }

    pub fn current_session(&self) -> Option<&ServiceSession> {
        self.tracker.current()
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Closed records followed by the open session, for on-screen display
    pub fn record_rows(&self) -> Vec<RecordRow> {
        let mut rows: Vec<RecordRow> = self.records.list().iter().map(RecordRow::closed).collect();
        if let Some(current) = self.tracker.current() {
            rows.push(RecordRow::in_progress(current));
        }
        rows
    }

    /// Export closed records only; the open session is never written
    pub fn export(&self, sink: &dyn RecordSink) -> std::result::Result<(), ExportError> {
        self.records.export(sink)?;
        log::info!("Exported {} service records", self.records.count());
        Ok(())
    }
}
