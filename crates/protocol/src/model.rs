use serde::{Deserialize, Serialize};

use crate::duty::{DutySegment, StatusMap};
use crate::types::Point;

/// Hours spent in each duty status.
pub type DutyTotals = StatusMap<f64>;

/// Vertical coordinate of each duty row.
pub type RowPositions = StatusMap<f64>;

/// A vertical grid tick at quarter-hour resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub x: f64,
    /// Full-hour tick (drawn heavier).
    pub major: bool,
}

/// Integer hour label placed above the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourLabel {
    pub x: f64,
    pub hour: u32,
    pub label: String,
}

/// A repair applied while normalizing a day's segments.
///
/// Indices refer to the position of the segment in the input list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentAdjustment {
    /// `end <= start` or a non-finite bound; excluded from totals and path.
    Dropped { index: usize, start: f64, end: f64 },
    /// Bounds outside `[0, day_range]` were pulled into range.
    Clamped { index: usize, start: f64, end: f64 },
    /// Start moved forward to remove an overlap with the previous segment.
    Trimmed { index: usize, from: f64, to: f64 },
    /// Input was not sorted by start.
    Reordered,
}

/// Display-agnostic description of one day's log sheet.
///
/// Built fresh on every render; nothing here refers to a drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    pub day: u32,
    pub row_positions: RowPositions,
    /// Status-change polyline, in sheet coordinates.
    pub path: Vec<Point>,
    pub totals: DutyTotals,
    pub grid_lines: Vec<GridLine>,
    pub hour_labels: Vec<HourLabel>,
    /// The normalized segments the path and totals were computed from.
    pub segments: Vec<DutySegment>,
    pub adjustments: Vec<SegmentAdjustment>,
}

impl RenderModel {
    pub fn total_hours(&self) -> f64 {
        self.totals.iter().map(|(_, h)| *h).sum()
    }

    /// Number of status changes drawn as vertical steps in the path.
    pub fn vertical_jumps(&self) -> usize {
        self.path
            .windows(2)
            .filter(|w| w[0].x == w[1].x && w[0].y != w[1].y)
            .count()
    }
}
