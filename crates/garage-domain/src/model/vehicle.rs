//! Registered vehicle

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use garage_types::{VehicleKind, VehicleStatus};

use super::session::VehicleSummary;
use super::REGISTERED_FORMAT;
use crate::service::profile::profile;

/// Vehicle waiting in (or moving through) the service queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Sequential identifier (e.g., "V001")
    pub id: String,
    /// Vehicle category, fixed at registration
    pub kind: VehicleKind,
    /// Display name (e.g., "Mustang")
    pub name: String,
    /// License / registration number
    pub license: String,
    /// Owner name
    pub owner: String,
    /// Queue status
    pub status: VehicleStatus,
    /// When registered
    pub registered_at: DateTime<Local>,
}

impl Vehicle {
    pub fn start_message(&self) -> String {
        profile(self.kind).start_message(&self.name)
    }

    pub fn stop_message(&self) -> String {
        profile(self.kind).stop_message(&self.name)
    }

    pub fn is_in_service(&self) -> bool {
        self.status == VehicleStatus::InService
    }

    /// Registration time as shown in the queue
    pub fn registered_label(&self) -> String {
        self.registered_at.format(REGISTERED_FORMAT).to_string()
    }

    /// Snapshot of the identifying fields carried by a service session
    pub fn summary(&self) -> VehicleSummary {
        VehicleSummary {
            id: self.id.clone(),
            kind: self.kind,
            name: self.name.clone(),
            license: self.license.clone(),
        }
    }
}
