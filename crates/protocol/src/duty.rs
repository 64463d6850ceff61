use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::ThemeToken;

/// The four regulatory duty-status categories shown on an ELD log sheet.
///
/// Variants are declared in the canonical top-to-bottom row order of the
/// paper log (Off Duty, Sleeper, Driving, On Duty); `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// All statuses in row order.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::Sleeper,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// Wire name used by the planning service.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::Sleeper => "sleeper",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty => "on_duty",
        }
    }

    /// Row label printed on the left of the log sheet.
    pub fn label(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF DUTY",
            DutyStatus::Sleeper => "SLEEPER",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::OnDuty => "ON DUTY",
        }
    }

    /// Zero-based row index, top to bottom.
    pub fn row_index(self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::Sleeper => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDuty => 3,
        }
    }

    pub fn theme_token(self) -> ThemeToken {
        match self {
            DutyStatus::OffDuty => ThemeToken::StatusOffDuty,
            DutyStatus::Sleeper => ThemeToken::StatusSleeper,
            DutyStatus::Driving => ThemeToken::StatusDriving,
            DutyStatus::OnDuty => ThemeToken::StatusOnDuty,
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown duty status {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for DutyStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off_duty" => Ok(DutyStatus::OffDuty),
            "sleeper" => Ok(DutyStatus::Sleeper),
            "driving" => Ok(DutyStatus::Driving),
            "on_duty" => Ok(DutyStatus::OnDuty),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// One segment exactly as the planning service sends it.
///
/// `status` stays a string here so a single unrecognized value fails the
/// day that carries it instead of the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Start, in hours from midnight.
    pub start: f64,
    /// End, in hours from midnight.
    pub end: f64,
    pub status: String,
}

impl SegmentRecord {
    pub fn new(start: f64, end: f64, status: DutyStatus) -> Self {
        Self {
            start,
            end,
            status: status.as_str().to_string(),
        }
    }
}

/// A validated, uninterrupted span of one duty status within a day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DutySegment {
    pub start: f64,
    pub end: f64,
    pub status: DutyStatus,
}

impl DutySegment {
    pub fn new(start: f64, end: f64, status: DutyStatus) -> Self {
        Self { start, end, status }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// One day of duty-status records from the planning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// 1-based day index within the trip.
    pub day: u32,
    pub segments: Vec<SegmentRecord>,
}

/// A value per duty status, serialized as an object keyed by wire name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusMap<T> {
    pub off_duty: T,
    pub sleeper: T,
    pub driving: T,
    pub on_duty: T,
}

impl<T> StatusMap<T> {
    pub fn from_fn(mut f: impl FnMut(DutyStatus) -> T) -> Self {
        Self {
            off_duty: f(DutyStatus::OffDuty),
            sleeper: f(DutyStatus::Sleeper),
            driving: f(DutyStatus::Driving),
            on_duty: f(DutyStatus::OnDuty),
        }
    }

    /// Entries in row order.
    pub fn iter(&self) -> impl Iterator<Item = (DutyStatus, &T)> {
        DutyStatus::ALL.into_iter().map(move |s| (s, &self[s]))
    }
}

impl<T> Index<DutyStatus> for StatusMap<T> {
    type Output = T;

    fn index(&self, status: DutyStatus) -> &T {
        match status {
            DutyStatus::OffDuty => &self.off_duty,
            DutyStatus::Sleeper => &self.sleeper,
            DutyStatus::Driving => &self.driving,
            DutyStatus::OnDuty => &self.on_duty,
        }
    }
}

impl<T> IndexMut<DutyStatus> for StatusMap<T> {
    fn index_mut(&mut self, status: DutyStatus) -> &mut T {
        match status {
            DutyStatus::OffDuty => &mut self.off_duty,
            DutyStatus::Sleeper => &mut self.sleeper,
            DutyStatus::Driving => &mut self.driving,
            DutyStatus::OnDuty => &mut self.on_duty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        for status in DutyStatus::ALL {
            assert_eq!(status.as_str().parse::<DutyStatus>(), Ok(status));
        }
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "sleeper_berth".parse::<DutyStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("sleeper_berth".into()));
        assert_eq!(err.to_string(), "unknown duty status \"sleeper_berth\"");
    }

    #[test]
    fn row_order_matches_declaration_order() {
        let mut sorted = DutyStatus::ALL;
        sorted.sort();
        assert_eq!(sorted, DutyStatus::ALL);
        for (i, status) in DutyStatus::ALL.iter().enumerate() {
            assert_eq!(status.row_index(), i);
        }
    }

    #[test]
    fn daily_log_deserializes_service_payload() {
        let json = r#"{"day":2,"segments":[
            {"start":0,"end":10.5,"status":"off_duty"},
            {"start":10.5,"end":24,"status":"driving"}
        ]}"#;
        let log: DailyLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.day, 2);
        assert_eq!(log.segments.len(), 2);
        assert_eq!(log.segments[0], SegmentRecord::new(0.0, 10.5, DutyStatus::OffDuty));
    }

    #[test]
    fn status_map_serializes_with_wire_keys() {
        let mut totals = StatusMap::<f64>::default();
        totals[DutyStatus::Driving] += 8.0;
        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["driving"], 8.0);
        assert_eq!(json["off_duty"], 0.0);
        assert_eq!(
            totals.iter().map(|(s, _)| s).collect::<Vec<_>>(),
            DutyStatus::ALL.to_vec()
        );
    }
}
