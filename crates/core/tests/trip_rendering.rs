//! Integration test: parse a planning-service response and render every
//! day through the model, the log-sheet view and both back ends.

use eld_log_core::layout::SheetLayout;
use eld_log_core::svg::render_svg;
use eld_log_core::text::render_text;
use eld_log_core::trip::{RouteSummary, parse_trip_plan, render_trip};
use eld_log_core::{RenderError, SheetOptions};
use eld_log_protocol::{DutyStatus, RenderCommand, SegmentAdjustment};

fn assert_hours(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected} hours, got {actual}"
    );
}

#[test]
fn renders_every_day_of_a_trip() {
    let data = include_bytes!("fixtures/trip-plan-sample.json");
    let plan = parse_trip_plan(data).expect("failed to parse trip plan");

    let summary = RouteSummary::from_route(&plan.route);
    assert_eq!(summary.vertices, 5);
    assert_hours(summary.distance_miles, 1254.37);

    let layout = SheetLayout::default();
    let sheets = render_trip(&plan, &layout, &SheetOptions::default());
    assert_eq!(sheets.len(), 3);
    assert!(sheets.iter().all(|s| s.is_rendered()));

    // Day 1: the planner's overnight rest spills past midnight and is clamped.
    let day1 = sheets[0].outcome.as_ref().expect("day 1 should render");
    assert_hours(day1.totals.on_duty, 1.5);
    assert_hours(day1.totals.driving, 11.0);
    assert_hours(day1.totals.off_duty, 11.5);
    assert_hours(day1.totals.sleeper, 0.0);
    assert_hours(day1.total_hours(), 24.0);
    assert_eq!(
        day1.adjustments,
        vec![SegmentAdjustment::Clamped {
            index: 4,
            start: 12.5,
            end: 25.0
        }]
    );
    assert_eq!(day1.path.last().map(|p| p.x), Some(layout.x_for(24.0)));
    assert_eq!(day1.vertical_jumps(), 4);

    let day2 = sheets[1].outcome.as_ref().expect("day 2 should render");
    assert_hours(day2.totals.driving, 8.5);
    assert_hours(day2.totals.on_duty, 1.5);
    assert_hours(day2.totals.off_duty, 14.0);
    assert!(day2.adjustments.is_empty());

    // Day 3 ends at dropoff: a partial day renders for the range present.
    let day3 = sheets[2].outcome.as_ref().expect("day 3 should render");
    assert_hours(day3.total_hours(), 8.5);
    assert_eq!(day3.path.first().map(|p| p.x), Some(layout.x_for(0.0)));
    assert_eq!(day3.path.last().map(|p| p.x), Some(layout.x_for(8.5)));
    assert_eq!(
        day3.path.last().map(|p| p.y),
        Some(layout.row_y(DutyStatus::OnDuty))
    );

    for sheet in &sheets {
        let model = sheet.outcome.as_ref().expect("rendered");
        assert!(model.path.windows(2).all(|w| w[1].x >= w[0].x));
        let durations: f64 = model.segments.iter().map(|s| s.duration()).sum();
        assert_hours(model.total_hours(), durations);

        let svg = render_svg(&sheet.commands, layout.width(), layout.height, false);
        assert!(svg.contains(&format!("Day {}", sheet.day)));
        assert_eq!(svg.matches("<path").count(), 1);

        let text = render_text(model, layout.day_range_hours);
        assert!(text.starts_with(&format!("Day {}\n", sheet.day)));
    }
}

#[test]
fn one_bad_day_does_not_block_the_others() {
    let data = br#"{
        "route": {"distance_miles": 10, "duration_hours": 0.2, "geometry": {"coordinates": []}},
        "daily_logs": [
            {"day": 1, "segments": [{"start": 0, "end": 24, "status": "driving"}]},
            {"day": 2, "segments": [{"start": 0, "end": 24, "status": "yard_move"}]},
            {"day": 3, "segments": []},
            {"day": 4, "segments": [{"start": 0, "end": 24, "status": "sleeper"}]}
        ]
    }"#;
    let plan = parse_trip_plan(data).expect("failed to parse trip plan");
    let layout = SheetLayout::default();
    let sheets = render_trip(&plan, &layout, &SheetOptions::default());

    let rendered: Vec<u32> = sheets
        .iter()
        .filter(|s| s.is_rendered())
        .map(|s| s.day)
        .collect();
    assert_eq!(rendered, vec![1, 4]);

    assert!(matches!(
        sheets[1].outcome,
        Err(RenderError::UnknownStatus { day: 2, index: 0, .. })
    ));
    assert_eq!(
        sheets[2].outcome.as_ref().err(),
        Some(&RenderError::EmptySegments { day: 3 })
    );

    // Failed days still produce a visible explanation.
    for sheet in &sheets[1..3] {
        let message = sheet.commands.iter().find_map(|c| match c {
            RenderCommand::DrawText { text, .. } if text.contains("log unavailable") => {
                Some(text.clone())
            }
            _ => None,
        });
        assert!(message.is_some(), "day {} has no placeholder", sheet.day);
    }

    let sleeper = sheets[3].outcome.as_ref().expect("day 4 should render");
    assert_hours(sleeper.totals.sleeper, 24.0);
}
