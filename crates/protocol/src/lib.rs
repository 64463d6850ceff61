pub mod commands;
pub mod duty;
pub mod model;
pub mod theme;
pub mod trip;
pub mod types;

pub use commands::{RenderCommand, TextAlign};
pub use duty::{DailyLog, DutySegment, DutyStatus, SegmentRecord, StatusMap, UnknownStatus};
pub use model::{DutyTotals, GridLine, HourLabel, RenderModel, RowPositions, SegmentAdjustment};
pub use theme::ThemeToken;
pub use trip::{Route, RouteGeometry, TripPlan, TripRequest};
pub use types::{Point, Rect};
