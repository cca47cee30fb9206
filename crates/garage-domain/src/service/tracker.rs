//! Service session tracker
//!
//! Holds the single process-wide open session. A vehicle moves
//! Waiting -> InService when its session opens and back to Waiting when the
//! session closes and lands in the record store.

use chrono::{DateTime, Local};
use rand::Rng;

use garage_types::{Error, FuelEfficiency, Result, VehicleStatus};

use super::profile::profile;
use super::record_store::RecordStore;
use super::registry::VehicleRegistry;
use crate::model::ServiceSession;

#[derive(Debug, Default)]
pub struct ServiceTracker {
    current: Option<ServiceSession>,
    issued: u32,
}

impl ServiceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The open session, if any
    pub fn current(&self) -> Option<&ServiceSession> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn start(
        &mut self,
        registry: &mut VehicleRegistry,
        vehicle_id: &str,
    ) -> Result<&ServiceSession> {
        self.start_at(registry, vehicle_id, Local::now())
    }

    /// Open a session for a waiting vehicle.
    ///
    /// Nothing changes on failure: the registry, the slot and the session
    /// counter are left as they were.
    pub fn start_at(
        &mut self,
        registry: &mut VehicleRegistry,
        vehicle_id: &str,
        started_at: DateTime<Local>,
    ) -> Result<&ServiceSession> {
        let vehicle = registry
            .get(vehicle_id)
            .ok_or_else(|| Error::NotFound(vehicle_id.to_string()))?;

        if let Some(open) = &self.current {
            return Err(Error::Conflict(format!(
                "session {} is already open for {}",
                open.id, open.vehicle.id
            )));
        }
        if vehicle.is_in_service() {
            return Err(Error::Conflict(format!(
                "vehicle {} is already in service",
                vehicle.id
            )));
        }

        let summary = vehicle.summary();
        registry.set_status(vehicle_id, VehicleStatus::InService)?;

        self.issued += 1;
        let session = ServiceSession::open(format!("S{:03}", self.issued), summary, started_at);
        log::info!("{} {}", session.id, session.vehicle.start_message());

        Ok(self.current.insert(session))
    }

    pub fn sample_fuel_efficiency(&mut self) -> Result<FuelEfficiency> {
        self.sample_fuel_efficiency_with(&mut rand::rng())
    }

    /// Take a new reading for the open session, replacing any earlier one
    pub fn sample_fuel_efficiency_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<FuelEfficiency> {
        let session = self.current.as_mut().ok_or(Error::NoActiveSession)?;
        let reading = profile(session.vehicle.kind).sample_efficiency(rng);
        session.fuel_efficiency = Some(reading);
        log::debug!("{} fuel efficiency {}", session.id, reading);
        Ok(reading)
    }

    pub fn stop(
        &mut self,
        registry: &mut VehicleRegistry,
        records: &mut RecordStore,
    ) -> Result<ServiceSession> {
        self.stop_at(registry, records, Local::now())
    }

    /// Close the open session, archive a copy and release the vehicle
    pub fn stop_at(
        &mut self,
        registry: &mut VehicleRegistry,
        records: &mut RecordStore,
        ended_at: DateTime<Local>,
    ) -> Result<ServiceSession> {
        let mut session = self.current.take().ok_or(Error::NoActiveSession)?;
        session.close(ended_at);

        registry.set_status(&session.vehicle.id, VehicleStatus::Waiting)?;
        records.append(session.clone())?;

        log::info!(
            "{} {} ({})",
            session.id,
            session.vehicle.stop_message(),
            session.duration_label().unwrap_or_default()
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use garage_types::VehicleKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (VehicleRegistry, RecordStore, ServiceTracker) {
        let mut registry = VehicleRegistry::new();
        registry
            .register(VehicleKind::Car, "Mustang", "XYZ123", "Dom")
            .unwrap();
        registry
            .register(VehicleKind::Truck, "Hauler", "TR-9", "Hobbs")
            .unwrap();
        (registry, RecordStore::new(), ServiceTracker::new())
    }

    #[test]
    fn test_start_unknown_vehicle() {
        let (mut registry, _, mut tracker) = setup();
        let result = tracker.start(&mut registry, "V042");
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_start_while_session_open() {
        let (mut registry, records, mut tracker) = setup();
        tracker.start(&mut registry, "V001").unwrap();

        let result = tracker.start(&mut registry, "V002");
        assert!(matches!(result, Err(Error::Conflict(_))));

        assert_eq!(registry.get("V002").unwrap().status, VehicleStatus::Waiting);
        assert_eq!(tracker.current().unwrap().id, "S001");
        assert!(records.is_empty());
    }

    #[test]
    fn test_start_vehicle_already_in_service() {
        let (mut registry, records, mut tracker) = setup();
        tracker.start(&mut registry, "V001").unwrap();

        let result = tracker.start(&mut registry, "V001");
        assert!(matches!(result, Err(Error::Conflict(_))));
        assert_eq!(registry.get("V001").unwrap().status, VehicleStatus::InService);
        assert!(records.is_empty());
    }

    #[test]
    fn test_sample_and_stop_without_session() {
        let (mut registry, mut records, mut tracker) = setup();
        assert!(matches!(
            tracker.sample_fuel_efficiency(),
            Err(Error::NoActiveSession)
        ));
        assert!(matches!(
            tracker.stop(&mut registry, &mut records),
            Err(Error::NoActiveSession)
        ));
    }

    #[test]
    fn test_sample_overwrites_previous_reading() {
        let (mut registry, _, mut tracker) = setup();
        tracker.start(&mut registry, "V002").unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        let first = tracker.sample_fuel_efficiency_with(&mut rng).unwrap();
        let second = tracker.sample_fuel_efficiency_with(&mut rng).unwrap();

        let truck = profile(VehicleKind::Truck);
        assert!(truck.contains(first));
        assert!(truck.contains(second));
        assert_eq!(tracker.current().unwrap().fuel_efficiency, Some(second));
    }

    #[test]
    fn test_stop_archives_and_releases_vehicle() {
        let (mut registry, mut records, mut tracker) = setup();
        let start = Local.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
        tracker.start_at(&mut registry, "V001", start).unwrap();

        let closed = tracker
            .stop_at(&mut registry, &mut records, start + Duration::seconds(754))
            .unwrap();

        assert_eq!(closed.duration_secs, Some(754));
        assert_eq!(closed.duration_label().as_deref(), Some("0:12:34"));
        assert!(!tracker.is_active());
        assert_eq!(registry.get("V001").unwrap().status, VehicleStatus::Waiting);
        assert_eq!(records.count(), 1);
        assert_eq!(records.last(), Some(&closed));
    }

    #[test]
    fn test_session_ids_continue_across_sessions() {
        let (mut registry, mut records, mut tracker) = setup();
        tracker.start(&mut registry, "V001").unwrap();
        tracker.stop(&mut registry, &mut records).unwrap();

        // The same vehicle can be serviced again once released
        let again = tracker.start(&mut registry, "V001").unwrap();
        assert_eq!(again.id, "S002");
    }
}
