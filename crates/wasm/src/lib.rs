//! Stateless browser bridge: JSON in, JSON or SVG out.
//!
//! Every function takes the planning-service JSON for a day (or a whole
//! trip) plus an optional sheet config, so the page can re-render any day
//! without holding state on this side.

// wasm-bindgen only accepts owned optional strings.
#![allow(clippy::needless_pass_by_value)]

use eld_log_core::config::ConfigError;
use eld_log_core::svg::{render_model_svg, render_svg};
use eld_log_core::trip::{TripParseError, parse_trip_plan, render_trip};
use eld_log_core::views::log_sheet::render_log_sheet;
use eld_log_core::{RenderError, SheetConfig, render};
use eld_log_protocol::DailyLog;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[derive(Debug, Error)]
enum BridgeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Trip(#[from] TripParseError),
}

#[derive(Serialize)]
struct DaySvg {
    day: u32,
    svg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Render one day, returning the `RenderModel` as JSON.
#[wasm_bindgen]
pub fn render_day(log_json: &str, config_json: Option<String>) -> Result<String, JsError> {
    Ok(day_model_json(log_json, config_json.as_deref())?)
}

/// Render one day, returning the log-sheet `RenderCommand` list as JSON
/// for a canvas painter.
#[wasm_bindgen]
pub fn render_day_commands(log_json: &str, config_json: Option<String>) -> Result<String, JsError> {
    Ok(day_commands_json(log_json, config_json.as_deref())?)
}

/// Render one day as a standalone SVG document.
#[wasm_bindgen]
pub fn render_day_svg(log_json: &str, config_json: Option<String>) -> Result<String, JsError> {
    Ok(day_svg(log_json, config_json.as_deref())?)
}

/// Render every day of a `{route, daily_logs}` response.
///
/// Returns a JSON array of `{day, svg, error?}`; a day that fails carries
/// its placeholder sheet and the error message instead of failing the call.
#[wasm_bindgen]
pub fn render_trip_svg(plan_json: &str, config_json: Option<String>) -> Result<String, JsError> {
    Ok(trip_svgs_json(plan_json, config_json.as_deref())?)
}

fn load_config(config_json: Option<&str>) -> Result<SheetConfig, BridgeError> {
    match config_json {
        Some(json) => Ok(SheetConfig::from_json(json.as_bytes())?),
        None => Ok(SheetConfig::default()),
    }
}

fn day_model_json(log_json: &str, config_json: Option<&str>) -> Result<String, BridgeError> {
    let config = load_config(config_json)?;
    let log: DailyLog = serde_json::from_str(log_json)?;
    let model = render(&log, &config.layout)?;
    Ok(serde_json::to_string(&model)?)
}

fn day_commands_json(log_json: &str, config_json: Option<&str>) -> Result<String, BridgeError> {
    let config = load_config(config_json)?;
    let log: DailyLog = serde_json::from_str(log_json)?;
    let model = render(&log, &config.layout)?;
    let commands = render_log_sheet(&model, &config.layout, &config.options);
    Ok(serde_json::to_string(&commands)?)
}

fn day_svg(log_json: &str, config_json: Option<&str>) -> Result<String, BridgeError> {
    let config = load_config(config_json)?;
    let log: DailyLog = serde_json::from_str(log_json)?;
    let model = render(&log, &config.layout)?;
    Ok(render_model_svg(&model, &config.layout, &config.options))
}

fn trip_svgs_json(plan_json: &str, config_json: Option<&str>) -> Result<String, BridgeError> {
    let config = load_config(config_json)?;
    let plan = parse_trip_plan(plan_json.as_bytes())?;
    let layout = &config.layout;
    let days: Vec<DaySvg> = render_trip(&plan, layout, &config.options)
        .into_iter()
        .map(|sheet| DaySvg {
            day: sheet.day,
            svg: render_svg(&sheet.commands, layout.width(), layout.height, config.options.dark),
            error: sheet.outcome.err().map(|e| e.to_string()),
        })
        .collect();
    Ok(serde_json::to_string(&days)?)
}
