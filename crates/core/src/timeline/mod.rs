//! The duty-status timeline renderer.
//!
//! Turns one [`DailyLog`] into a [`RenderModel`]: normalized segments,
//! per-status totals, the stepped status path and the sheet grid. Pure and
//! stateless; each call is independent.

pub mod normalize;
pub mod path;
pub mod totals;

pub use normalize::{Normalized, normalize_segments};
pub use path::{EmptyPathError, build_path};
pub use totals::compute_totals;

use eld_log_protocol::{DailyLog, RenderModel};

use crate::error::RenderError;
use crate::layout::{GridLayout, SheetLayout, layout_grid};

/// Render one day's log into a display-agnostic model.
pub fn render(log: &DailyLog, layout: &SheetLayout) -> Result<RenderModel, RenderError> {
    layout.validate()?;

    let Normalized {
        segments,
        adjustments,
    } = normalize_segments(log.day, &log.segments, layout.day_end())?;

    let totals = compute_totals(&segments);
    let path =
        build_path(&segments, layout).map_err(|_| RenderError::EmptySegments { day: log.day })?;
    let GridLayout {
        grid_lines,
        hour_labels,
        row_positions,
    } = layout_grid(layout);

    Ok(RenderModel {
        day: log.day,
        row_positions,
        path,
        totals,
        grid_lines,
        hour_labels,
        segments,
        adjustments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eld_log_protocol::{DutyStatus, SegmentAdjustment, SegmentRecord};

    fn day(day: u32, segments: &[(f64, f64, &str)]) -> DailyLog {
        DailyLog {
            day,
            segments: segments
                .iter()
                .map(|&(start, end, status)| SegmentRecord {
                    start,
                    end,
                    status: status.into(),
                })
                .collect(),
        }
    }

    #[test]
    fn full_day_driving() {
        let log = day(1, &[(0.0, 24.0, "driving")]);
        let model = render(&log, &SheetLayout::default()).unwrap();
        assert_eq!(model.totals.driving, 24.0);
        assert_eq!(model.totals.off_duty, 0.0);
        assert_eq!(model.totals.sleeper, 0.0);
        assert_eq!(model.totals.on_duty, 0.0);
        assert_eq!(model.path.len(), 2);
        assert_eq!(model.vertical_jumps(), 0);
    }

    #[test]
    fn four_segment_day() {
        let log = day(
            2,
            &[
                (0.0, 10.0, "off_duty"),
                (10.0, 11.0, "on_duty"),
                (11.0, 19.0, "driving"),
                (19.0, 24.0, "off_duty"),
            ],
        );
        let model = render(&log, &SheetLayout::default()).unwrap();
        assert_eq!(model.day, 2);
        assert_eq!(model.totals.off_duty, 15.0);
        assert_eq!(model.totals.on_duty, 1.0);
        assert_eq!(model.totals.driving, 8.0);
        assert_eq!(model.totals.sleeper, 0.0);
        assert_eq!(model.vertical_jumps(), 3);
        assert!((model.total_hours() - 24.0).abs() < 1e-6);
        assert_eq!(model.grid_lines.len(), 97);
        assert_eq!(model.hour_labels.len(), 25);
        assert_eq!(model.row_positions.sleeper, 90.0);
    }

    #[test]
    fn render_is_idempotent() {
        let log = day(
            1,
            &[
                (0.0, 1.0, "on_duty"),
                (1.0, 9.0, "driving"),
                (9.0, 9.5, "on_duty"),
                (9.5, 12.5, "driving"),
                (12.5, 24.0, "off_duty"),
            ],
        );
        let layout = SheetLayout::default();
        let a = render(&log, &layout).unwrap();
        let b = render(&log, &layout).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn degenerate_segment_does_not_fail_the_day() {
        let log = day(
            1,
            &[
                (0.0, 8.0, "off_duty"),
                (8.0, 8.0, "on_duty"),
                (8.0, 24.0, "driving"),
            ],
        );
        let model = render(&log, &SheetLayout::default()).unwrap();
        assert_eq!(model.totals.on_duty, 0.0);
        assert_eq!(model.totals.driving, 16.0);
        assert_eq!(model.segments.len(), 2);
        assert_eq!(model.vertical_jumps(), 1);
        assert_eq!(
            model.adjustments,
            vec![SegmentAdjustment::Dropped {
                index: 1,
                start: 8.0,
                end: 8.0
            }]
        );
    }

    #[test]
    fn totals_match_segment_durations() {
        let log = day(
            1,
            &[
                (0.0, 6.25, "sleeper"),
                (6.25, 7.0, "on_duty"),
                (7.0, 14.75, "driving"),
            ],
        );
        let model = render(&log, &SheetLayout::default()).unwrap();
        let durations: f64 = model.segments.iter().map(|s| s.duration()).sum();
        assert!((model.total_hours() - durations).abs() < 1e-6);
        assert!((model.total_hours() - 14.75).abs() < 1e-6);
    }

    #[test]
    fn unsorted_input_renders_sorted() {
        let log = day(1, &[(12.0, 24.0, "off_duty"), (0.0, 12.0, "driving")]);
        let model = render(&log, &SheetLayout::default()).unwrap();
        assert_eq!(model.segments[0].status, DutyStatus::Driving);
        assert!(model.path.windows(2).all(|w| w[1].x >= w[0].x));
        assert_eq!(model.adjustments, vec![SegmentAdjustment::Reordered]);
    }

    #[test]
    fn unknown_status_is_an_explicit_error() {
        let log = day(3, &[(0.0, 24.0, "personal_conveyance")]);
        let err = render(&log, &SheetLayout::default()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownStatus { day: 3, index: 0, .. }));
    }

    #[test]
    fn empty_day_is_an_error() {
        let log = day(5, &[]);
        assert_eq!(
            render(&log, &SheetLayout::default()),
            Err(RenderError::EmptySegments { day: 5 })
        );
    }

    #[test]
    fn invalid_layout_is_rejected() {
        let log = day(1, &[(0.0, 24.0, "driving")]);
        let layout = SheetLayout {
            first_row_y: 10.0,
            ..SheetLayout::default()
        };
        assert!(matches!(
            render(&log, &layout),
            Err(RenderError::Layout(_))
        ));
    }

    #[test]
    fn model_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RenderModel>();
        assert_send_sync::<RenderError>();
        assert_send_sync::<SheetLayout>();
    }
}
