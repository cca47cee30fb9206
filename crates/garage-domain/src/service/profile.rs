//! Per-kind behaviour table

use rand::Rng;

use garage_types::{FuelEfficiency, VehicleKind};

/// Fixed behaviour attached to a vehicle kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindProfile {
    pub kind: VehicleKind,
    /// Lower bound of the fuel efficiency range (km/l)
    pub min_efficiency: f64,
    /// Upper bound of the fuel efficiency range (km/l)
    pub max_efficiency: f64,
}

const PROFILES: [KindProfile; 3] = [
    KindProfile {
        kind: VehicleKind::Car,
        min_efficiency: 12.0,
        max_efficiency: 18.0,
    },
    KindProfile {
        kind: VehicleKind::Bike,
        min_efficiency: 35.0,
        max_efficiency: 60.0,
    },
    KindProfile {
        kind: VehicleKind::Truck,
        min_efficiency: 4.0,
        max_efficiency: 8.0,
    },
];

/// Look up the profile for a kind
pub fn profile(kind: VehicleKind) -> &'static KindProfile {
    match kind {
        VehicleKind::Car => &PROFILES[0],
        VehicleKind::Bike => &PROFILES[1],
        VehicleKind::Truck => &PROFILES[2],
    }
}

impl KindProfile {
    pub fn start_message(&self, name: &str) -> String {
        format!("{} ({}) started.", name, self.kind)
    }

    pub fn stop_message(&self, name: &str) -> String {
        format!("{} ({}) stopped.", name, self.kind)
    }

    /// Draw a simulated reading uniformly from the closed range
    pub fn sample_efficiency<R: Rng + ?Sized>(&self, rng: &mut R) -> FuelEfficiency {
        FuelEfficiency::from_raw(rng.random_range(self.min_efficiency..=self.max_efficiency))
    }

    pub fn contains(&self, reading: FuelEfficiency) -> bool {
        (self.min_efficiency..=self.max_efficiency).contains(&reading.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_profile_table_covers_every_kind() {
        for kind in VehicleKind::ALL {
            assert_eq!(profile(kind).kind, kind);
        }
        assert_eq!(profile(VehicleKind::Bike).min_efficiency, 35.0);
        assert_eq!(profile(VehicleKind::Truck).max_efficiency, 8.0);
    }

    #[test]
    fn test_messages() {
        let car = profile(VehicleKind::Car);
        assert_eq!(car.start_message("Mustang"), "Mustang (Car) started.");
        assert_eq!(car.stop_message("Mustang"), "Mustang (Car) stopped.");
        let truck = profile(VehicleKind::Truck);
        assert_eq!(truck.start_message("Hauler"), "Hauler (Truck) started.");
    }

    #[test]
    fn test_samples_stay_in_range_and_rounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for kind in VehicleKind::ALL {
            let p = profile(kind);
            for _ in 0..1000 {
                let reading = p.sample_efficiency(&mut rng);
                assert!(p.contains(reading), "{:?} out of range: {}", kind, reading);
                let cents = reading.value() * 100.0;
                assert!((cents - cents.round()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_samples_spread_across_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = profile(VehicleKind::Bike);
        let readings: Vec<f64> = (0..1000)
            .map(|_| p.sample_efficiency(&mut rng).value())
            .collect();
        let mean = readings.iter().sum::<f64>() / readings.len() as f64;
        let midpoint = (p.min_efficiency + p.max_efficiency) / 2.0;
        // Uniform on [35, 60]: sd of the mean over 1000 draws is ~0.23
        assert!((mean - midpoint).abs() < 1.5, "mean {} too far from {}", mean, midpoint);
        assert!(readings.iter().any(|&r| r < 40.0));
        assert!(readings.iter().any(|&r| r > 55.0));
    }
}
