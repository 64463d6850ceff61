//! Planning-service response handling: parse a trip plan, render every
//! day independently, and summarize the route.

use std::fmt;

use eld_log_protocol::{DailyLog, RenderCommand, RenderModel, Route, TripPlan, TripRequest};
use thiserror::Error;

use crate::error::RenderError;
use crate::layout::SheetLayout;
use crate::timeline::render;
use crate::views::log_sheet::{SheetOptions, render_log_sheet, render_unavailable};

/// 70-hour / 8-day property-carrying cycle.
pub const CYCLE_LIMIT_HOURS: f64 = 70.0;

#[derive(Debug, Error)]
pub enum TripParseError {
    #[error("invalid trip plan JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TripRequestError {
    #[error("{0} must not be empty")]
    EmptyLocation(&'static str),
    #[error("cycle hours used must be between 0 and 70, got {0}")]
    CycleHoursOutOfRange(f64),
}

/// Parse the `{route, daily_logs}` response body.
pub fn parse_trip_plan(data: &[u8]) -> Result<TripPlan, TripParseError> {
    Ok(serde_json::from_slice(data)?)
}

/// Check a request before it is sent to the planning service.
pub fn validate_request(request: &TripRequest) -> Result<(), TripRequestError> {
    for (field, value) in [
        ("current_location", &request.current_location),
        ("pickup_location", &request.pickup_location),
        ("dropoff_location", &request.dropoff_location),
    ] {
        if value.trim().is_empty() {
            return Err(TripRequestError::EmptyLocation(field));
        }
    }
    let hours = request.cycle_used_hours;
    if !hours.is_finite() || !(0.0..=CYCLE_LIMIT_HOURS).contains(&hours) {
        return Err(TripRequestError::CycleHoursOutOfRange(hours));
    }
    Ok(())
}

/// One day's sheet: either the rendered model or the reason it failed,
/// plus the commands to draw in either case.
#[derive(Debug, Clone)]
pub struct DaySheet {
    pub day: u32,
    pub outcome: Result<RenderModel, RenderError>,
    pub commands: Vec<RenderCommand>,
}

impl DaySheet {
    pub fn is_rendered(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Render every day of a plan. A failing day gets a placeholder sheet and
/// never stops the others.
pub fn render_trip(plan: &TripPlan, layout: &SheetLayout, options: &SheetOptions) -> Vec<DaySheet> {
    render_daily_logs(&plan.daily_logs, layout, options)
}

pub fn render_daily_logs(
    logs: &[DailyLog],
    layout: &SheetLayout,
    options: &SheetOptions,
) -> Vec<DaySheet> {
    logs.iter()
        .map(|daily| match render(daily, layout) {
            Ok(model) => {
                let commands = render_log_sheet(&model, layout, options);
                DaySheet {
                    day: daily.day,
                    outcome: Ok(model),
                    commands,
                }
            }
            Err(err) => {
                log::error!("{err}");
                DaySheet {
                    day: daily.day,
                    commands: render_unavailable(daily.day, &err, layout),
                    outcome: Err(err),
                }
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

/// Textual route overview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub vertices: usize,
    pub bounds: Option<GeoBounds>,
}

impl RouteSummary {
    pub fn from_route(route: &Route) -> Self {
        let bounds = route
            .geometry
            .coordinates
            .iter()
            .filter(|[lng, lat]| lng.is_finite() && lat.is_finite())
            .fold(None, |acc: Option<GeoBounds>, &[lng, lat]| {
                Some(match acc {
                    None => GeoBounds {
                        min_lng: lng,
                        min_lat: lat,
                        max_lng: lng,
                        max_lat: lat,
                    },
                    Some(b) => GeoBounds {
                        min_lng: b.min_lng.min(lng),
                        min_lat: b.min_lat.min(lat),
                        max_lng: b.max_lng.max(lng),
                        max_lat: b.max_lat.max(lat),
                    },
                })
            });

        Self {
            distance_miles: route.distance_miles,
            duration_hours: route.duration_hours,
            vertices: route.geometry.coordinates.len(),
            bounds,
        }
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} mi, {:.2} h, {} points",
            self.distance_miles, self.duration_hours, self.vertices
        )?;
        if let Some(b) = self.bounds {
            write!(
                f,
                ", bounds lat {:.4}..{:.4} lng {:.4}..{:.4}",
                b.min_lat, b.max_lat, b.min_lng, b.max_lng
            )?;
        }
        Ok(())
    }
}
