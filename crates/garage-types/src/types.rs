//! Shared value types for vehicles, sessions and export

use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Vehicle category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Bike,
    Truck,
}

impl VehicleKind {
    /// All kinds in display order
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Car, VehicleKind::Bike, VehicleKind::Truck];

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Bike => "Bike",
            VehicleKind::Truck => "Truck",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        VehicleKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                Error::Validation(format!(
                    "unknown vehicle type '{}' (expected Car, Bike or Truck)",
                    trimmed
                ))
            })
    }
}

/// Position of a vehicle in the service queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[default]
    Waiting,
    InService,
}

impl VehicleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Waiting => "Waiting",
            VehicleStatus::InService => "In Service",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fuel efficiency reading in km/l, held at two decimal places
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuelEfficiency(f64);

impl FuelEfficiency {
    /// Unit suffix used in display strings
    pub const UNIT: &'static str = "km/l";

    /// Round a raw reading to two decimals
    pub fn from_raw(value: f64) -> Self {
        Self((value * 100.0).round() / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for FuelEfficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, Self::UNIT)
    }
}

/// File format for exported service records
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    /// Resolve the format from a destination path.
    ///
    /// `.csv` (any case) selects CSV; every other extension is written as a
    /// workbook. Paths without an extension yield `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(ExportFormat::Csv)
        } else {
            Some(ExportFormat::Xlsx)
        }
    }

    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
