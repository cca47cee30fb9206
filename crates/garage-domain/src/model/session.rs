//! Service session model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use garage_types::{FuelEfficiency, VehicleKind};

use super::TIMESTAMP_FORMAT;
use crate::service::profile::profile;

/// Identifying fields of the vehicle a session belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSummary {
    /// Registry id of the vehicle
    pub id: String,
    pub kind: VehicleKind,
    pub name: String,
    pub license: String,
}

impl VehicleSummary {
    /// "{Kind} - {name}" as shown in the records table
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.kind, self.name)
    }

    pub fn start_message(&self) -> String {
        profile(self.kind).start_message(&self.name)
    }

    pub fn stop_message(&self) -> String {
        profile(self.kind).stop_message(&self.name)
    }
}

/// A single timed visit of one vehicle through service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSession {
    /// Sequential identifier (e.g., "S001")
    pub id: String,
    /// Vehicle being serviced
    pub vehicle: VehicleSummary,
    pub started_at: DateTime<Local>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Local>>,
    /// Whole seconds between start and end, set on close
    #[serde(default)]
    pub duration_secs: Option<i64>,
    /// Latest fuel efficiency reading
    #[serde(default)]
    pub fuel_efficiency: Option<FuelEfficiency>,
}

impl ServiceSession {
    pub(crate) fn open(id: String, vehicle: VehicleSummary, started_at: DateTime<Local>) -> Self {
        Self {
            id,
            vehicle,
            started_at,
            ended_at: None,
            duration_secs: None,
            fuel_efficiency: None,
        }
    }

    /// Stamp the end time and derive the duration.
    ///
    /// A clock that stepped backwards yields a zero duration.
    pub(crate) fn close(&mut self, ended_at: DateTime<Local>) {
        let secs = (ended_at - self.started_at).num_seconds().max(0);
        self.ended_at = Some(ended_at);
        self.duration_secs = Some(secs);
    }

    pub fn is_closed(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn start_label(&self) -> String {
        self.started_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_label(&self) -> Option<String> {
        self.ended_at
            .map(|end| end.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn duration_label(&self) -> Option<String> {
        self.duration_secs.map(format_duration)
    }
}

/// Format whole seconds as `H:MM:SS`, prefixed with a day count past 24h.
pub fn format_duration(total_secs: i64) -> String {
    let total_secs = total_secs.max(0);
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn summary() -> VehicleSummary {
        VehicleSummary {
            id: "V001".to_string(),
            kind: VehicleKind::Car,
            name: "Mustang".to_string(),
            license: "XYZ123".to_string(),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00:00");
        assert_eq!(format_duration(65), "0:01:05");
        assert_eq!(format_duration(3_725), "1:02:05");
        assert_eq!(format_duration(86_400 + 61), "1 day, 0:01:01");
        assert_eq!(format_duration(2 * 86_400), "2 days, 0:00:00");
        assert_eq!(format_duration(-5), "0:00:00");
    }

    #[test]
    fn test_close_truncates_to_whole_seconds() {
        let start = Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut session = ServiceSession::open("S001".to_string(), summary(), start);
        assert!(!session.is_closed());

        session.close(start + Duration::milliseconds(90_750));

        assert!(session.is_closed());
        assert_eq!(session.duration_secs, Some(90));
        assert_eq!(session.duration_label().as_deref(), Some("0:01:30"));
        assert_eq!(session.start_label(), "2024-03-01 09:00:00");
        assert_eq!(session.end_label().as_deref(), Some("2024-03-01 09:01:30"));
    }

    #[test]
    fn test_close_with_backwards_clock() {
        let start = Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut session = ServiceSession::open("S001".to_string(), summary(), start);
        session.close(start - Duration::seconds(3));
        assert_eq!(session.duration_secs, Some(0));
    }

    #[test]
    fn test_summary_display_name() {
        assert_eq!(summary().display_name(), "Car - Mustang");
        assert_eq!(summary().start_message(), "Mustang (Car) started.");
    }
}
