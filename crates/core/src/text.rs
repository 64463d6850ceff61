//! Plain-text back end: a fixed-width log grid for terminals and tests.
//!
//! One column per quarter hour, one line per duty status. Works straight
//! from the [`RenderModel`]'s normalized segments, no drawing surface.

use std::fmt::Write as _;

use eld_log_protocol::{DutyStatus, RenderModel};

use crate::views::log_sheet::format_hours;

const LABEL_WIDTH: usize = 9;
const CELLS_PER_HOUR: usize = 4;
const ACTIVE: char = '#';
const IDLE: char = '.';

/// Render a day as text, e.g.
///
/// ```text
/// Day 1
///          |0   1   2  ...
/// OFF DUTY |########....  10.00
/// ```
pub fn render_text(model: &RenderModel, day_range_hours: u32) -> String {
    let hours = day_range_hours as usize;
    let cells = hours * CELLS_PER_HOUR;
    let mut out = String::with_capacity((cells + 32) * 7);

    let _ = writeln!(out, "Day {}", model.day);

    let mut header = String::with_capacity(cells + 4);
    for hour in 0..hours {
        let _ = write!(header, "{:<width$}", hour, width = CELLS_PER_HOUR);
    }
    let _ = writeln!(out, "{:<LABEL_WIDTH$}|{header}|", "");

    for status in DutyStatus::ALL {
        let row: String = (0..cells)
            .map(|cell| {
                if is_active(model, status, cell) {
                    ACTIVE
                } else {
                    IDLE
                }
            })
            .collect();
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$}|{row}| {:>6}",
            status.label(),
            format_hours(model.totals[status]),
        );
    }

    let _ = writeln!(
        out,
        "{:>width$}{:>6}",
        "",
        format_hours(model.total_hours()),
        width = LABEL_WIDTH + cells + 3,
    );
    out
}

/// A cell is active when its midpoint falls inside a segment of `status`.
fn is_active(model: &RenderModel, status: DutyStatus, cell: usize) -> bool {
    let mid = (cell as f64 + 0.5) / CELLS_PER_HOUR as f64;
    model
        .segments
        .iter()
        .any(|s| s.status == status && s.start <= mid && mid < s.end)
}
