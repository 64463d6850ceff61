use eld_log_protocol::DutyStatus;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("{field} must be a finite positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("day range must be between 1 and 24 hours, got {0}")]
    DayRange(u32),
    #[error("grid bottom ({bottom}) must lie below grid top ({top})")]
    InvertedGrid { top: f64, bottom: f64 },
    #[error("{status} row at y={y} lies outside the grid ({top}..{bottom})")]
    RowOutsideGrid {
        status: DutyStatus,
        y: f64,
        top: f64,
        bottom: f64,
    },
}

/// Failure to render one day. Local to that day's sheet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("day {day}: no duty segments to render")]
    EmptySegments { day: u32 },
    #[error("day {day}: segment {index} has unknown duty status {status:?}")]
    UnknownStatus {
        day: u32,
        index: usize,
        status: String,
    },
    #[error("invalid sheet layout: {0}")]
    Layout(#[from] LayoutError),
}

impl RenderError {
    /// Short reason suitable for the inline placeholder on the sheet.
    pub fn reason(&self) -> String {
        match self {
            RenderError::EmptySegments { .. } => "no duty segments".to_string(),
            RenderError::UnknownStatus { status, .. } => format!("unknown duty status \"{status}\""),
            RenderError::Layout(err) => err.to_string(),
        }
    }
}
