use eld_log_protocol::{DutySegment, Point};
use thiserror::Error;

use crate::layout::SheetLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot build a duty path from zero segments")]
pub struct EmptyPathError;

/// Build the stepped status line as one connected polyline.
///
/// For each segment the line steps vertically at its start from the
/// previous row to the segment's row, then runs horizontally to its end.
/// A gap between segments is bridged at the previous row. Zero-length
/// moves are skipped and a run that continues an unchanged status extends
/// the previous run, so a single segment yields exactly two vertices.
///
/// Segments are expected in start order; x never moves backwards even if
/// they are not.
pub fn build_path(
    segments: &[DutySegment],
    layout: &SheetLayout,
) -> Result<Vec<Point>, EmptyPathError> {
    let first = segments.first().ok_or(EmptyPathError)?;

    let mut path = Vec::with_capacity(segments.len() * 2 + 1);
    let mut pen = Point::new(layout.x_for(first.start), layout.row_y(first.status));
    path.push(pen);

    for segment in segments {
        let x1 = layout.x_for(segment.start).max(pen.x);
        let x2 = layout.x_for(segment.end).max(x1);
        let y = layout.row_y(segment.status);

        line_to(&mut path, Point::new(x1, pen.y));
        line_to(&mut path, Point::new(x1, y));
        line_to(&mut path, Point::new(x2, y));
        pen = Point::new(x2, y);
    }

    Ok(path)
}

fn line_to(path: &mut Vec<Point>, to: Point) {
    let n = path.len();
    if path.last() == Some(&to) {
        return;
    }
    // Extend a horizontal run instead of adding a collinear vertex.
    if n >= 2 && path[n - 2].y == to.y && path[n - 1].y == to.y {
        path[n - 1] = to;
        return;
    }
    path.push(to);
}
