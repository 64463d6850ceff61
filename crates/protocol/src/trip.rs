use serde::{Deserialize, Serialize};

use crate::duty::DailyLog;

/// Body posted to the planning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Hours already used in the driver's 70-hour / 8-day cycle.
    pub cycle_used_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
}

/// Planning service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub route: Route,
    #[serde(default)]
    pub daily_logs: Vec<DailyLog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub geometry: RouteGeometry,
}

/// GeoJSON-style line geometry; coordinates are `[lng, lat]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}
