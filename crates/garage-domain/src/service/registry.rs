//! Vehicle registry

use chrono::{DateTime, Local};

use garage_types::{Error, Result, VehicleKind, VehicleStatus};

use crate::model::Vehicle;

/// Registered vehicles in insertion order
#[derive(Debug, Default)]
pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
    issued: u32,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new vehicle stamped with the current time
    pub fn register(
        &mut self,
        kind: VehicleKind,
        name: &str,
        license: &str,
        owner: &str,
    ) -> Result<&Vehicle> {
        self.register_at(kind, name, license, owner, Local::now())
    }

    /// Register a new vehicle with an explicit registration time.
    ///
    /// Name, license and owner are stored trimmed; any of them blank is a
    /// validation error and leaves the registry untouched.
    pub fn register_at(
        &mut self,
        kind: VehicleKind,
        name: &str,
        license: &str,
        owner: &str,
        registered_at: DateTime<Local>,
    ) -> Result<&Vehicle> {
        let (name, license, owner) = (name.trim(), license.trim(), owner.trim());

        let missing: Vec<&str> = [("name", name), ("license", license), ("owner", owner)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(Error::Validation(format!(
                "All fields required (missing: {})",
                missing.join(", ")
            )));
        }

        self.issued += 1;
        let vehicle = Vehicle {
            id: format!("V{:03}", self.issued),
            kind,
            name: name.to_string(),
            license: license.to_string(),
            owner: owner.to_string(),
            status: VehicleStatus::Waiting,
            registered_at,
        };
        log::info!("Registered {} {} ({})", vehicle.id, vehicle.kind, vehicle.name);

        self.vehicles.push(vehicle);
        Ok(&self.vehicles[self.vehicles.len() - 1])
    }

    /// All vehicles in registration order
    pub fn list(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Get a vehicle by ID
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    /// Vehicles currently waiting for service
    pub fn waiting(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Waiting)
    }

    pub(crate) fn set_status(&mut self, id: &str, status: VehicleStatus) -> Result<()> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        vehicle.status = status;
        Ok(())
    }
}
