//! Fixed log-sheet geometry: grid ticks, hour labels and duty rows.

use eld_log_protocol::{DutyStatus, GridLine, HourLabel, RowPositions};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

const QUARTERS_PER_HOUR: u32 = 4;

/// Geometry of a paper-style log sheet, in sheet units (SVG user units).
///
/// Every field has a default matching the standard sheet, so a partial
/// config only overrides what it names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Hours covered by the grid.
    pub day_range_hours: u32,
    pub hour_width: f64,
    pub left_margin: f64,
    pub right_margin: f64,
    pub grid_top: f64,
    pub grid_bottom: f64,
    /// Y of the Off Duty row; the other rows follow every `row_spacing`.
    pub first_row_y: f64,
    pub row_spacing: f64,
    /// Baseline of the hour labels.
    pub label_y: f64,
    /// Baseline of the signature row.
    pub signature_y: f64,
    pub height: f64,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            day_range_hours: 24,
            hour_width: 30.0,
            left_margin: 90.0,
            right_margin: 90.0,
            grid_top: 30.0,
            grid_bottom: 180.0,
            first_row_y: 60.0,
            row_spacing: 30.0,
            label_y: 20.0,
            signature_y: 220.0,
            height: 280.0,
        }
    }
}

impl SheetLayout {
    /// Check the geometry before any day is drawn with it.
    ///
    /// Catches a row mapping that would put a status outside the grid,
    /// which would otherwise show up as an out-of-range draw coordinate.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.day_range_hours == 0 || self.day_range_hours > 24 {
            return Err(LayoutError::DayRange(self.day_range_hours));
        }
        for (field, value) in [
            ("hour_width", self.hour_width),
            ("row_spacing", self.row_spacing),
            ("height", self.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::NotPositive { field, value });
            }
        }
        for (field, value) in [
            ("left_margin", self.left_margin),
            ("right_margin", self.right_margin),
            ("grid_top", self.grid_top),
            ("grid_bottom", self.grid_bottom),
            ("first_row_y", self.first_row_y),
            ("label_y", self.label_y),
            ("signature_y", self.signature_y),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::NotFinite { field, value });
            }
        }
        if self.grid_bottom <= self.grid_top {
            return Err(LayoutError::InvertedGrid {
                top: self.grid_top,
                bottom: self.grid_bottom,
            });
        }
        for status in DutyStatus::ALL {
            let y = self.row_y(status);
            if y <= self.grid_top || y >= self.grid_bottom {
                return Err(LayoutError::RowOutsideGrid {
                    status,
                    y,
                    top: self.grid_top,
                    bottom: self.grid_bottom,
                });
            }
        }
        Ok(())
    }

    /// Last hour covered by the grid.
    pub fn day_end(&self) -> f64 {
        f64::from(self.day_range_hours)
    }

    pub fn grid_width(&self) -> f64 {
        self.day_end() * self.hour_width
    }

    /// Total sheet width including both margins.
    pub fn width(&self) -> f64 {
        self.left_margin + self.grid_width() + self.right_margin
    }

    /// Horizontal position of a time given in hours from midnight.
    pub fn x_for(&self, hours: f64) -> f64 {
        self.left_margin + hours * self.hour_width
    }

    pub fn row_y(&self, status: DutyStatus) -> f64 {
        self.first_row_y + self.row_spacing * status.row_index() as f64
    }

    pub fn row_positions(&self) -> RowPositions {
        RowPositions::from_fn(|status| self.row_y(status))
    }
}

/// Data-independent part of a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub grid_lines: Vec<GridLine>,
    pub hour_labels: Vec<HourLabel>,
    pub row_positions: RowPositions,
}

/// Quarter-hour grid lines (both borders included, every fourth one
/// major), integer hour labels `0..=day_range_hours`, and the row map.
pub fn layout_grid(layout: &SheetLayout) -> GridLayout {
    let quarters = layout.day_range_hours * QUARTERS_PER_HOUR;
    let quarter_width = layout.hour_width / f64::from(QUARTERS_PER_HOUR);

    let grid_lines = (0..=quarters)
        .map(|i| GridLine {
            x: layout.left_margin + f64::from(i) * quarter_width,
            major: i % QUARTERS_PER_HOUR == 0,
        })
        .collect();

    let hour_labels = (0..=layout.day_range_hours)
        .map(|hour| HourLabel {
            x: layout.x_for(f64::from(hour)),
            hour,
            label: hour.to_string(),
        })
        .collect();

    GridLayout {
        grid_lines,
        hour_labels,
        row_positions: layout.row_positions(),
    }
}
