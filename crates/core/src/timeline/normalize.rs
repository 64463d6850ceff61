use eld_log_protocol::{DutySegment, DutyStatus, SegmentAdjustment, SegmentRecord};

use crate::error::RenderError;

/// Segments ready for totals and path building: statuses parsed, bounds
/// inside the day, sorted by start, no overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub segments: Vec<DutySegment>,
    pub adjustments: Vec<SegmentAdjustment>,
}

/// Validate and repair one day's segments.
///
/// Unknown statuses fail the day. Everything else is repaired and logged:
/// degenerate segments (`end <= start`, non-finite bounds) are dropped,
/// bounds are clamped to `[0, day_end]`, unsorted input is re-sorted by
/// start, and a segment overlapping its predecessor is trimmed to start
/// where the predecessor ends.
pub fn normalize_segments(
    day: u32,
    records: &[SegmentRecord],
    day_end: f64,
) -> Result<Normalized, RenderError> {
    let mut adjustments = Vec::new();
    let mut indexed: Vec<(usize, DutySegment)> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let status: DutyStatus = record.status.parse().map_err(|_| RenderError::UnknownStatus {
            day,
            index,
            status: record.status.clone(),
        })?;

        let (start, end) = (record.start, record.end);
        if !start.is_finite() || !end.is_finite() || end <= start {
            log::warn!("day {day}: dropping degenerate segment {index} ({start}..{end} {status})");
            adjustments.push(SegmentAdjustment::Dropped { index, start, end });
            continue;
        }

        let clamped_start = start.clamp(0.0, day_end);
        let clamped_end = end.clamp(0.0, day_end);
        if clamped_end <= clamped_start {
            log::warn!("day {day}: dropping segment {index} outside the day ({start}..{end})");
            adjustments.push(SegmentAdjustment::Dropped { index, start, end });
            continue;
        }
        if clamped_start != start || clamped_end != end {
            log::warn!(
                "day {day}: clamping segment {index} from {start}..{end} to {clamped_start}..{clamped_end}"
            );
            adjustments.push(SegmentAdjustment::Clamped { index, start, end });
        }

        indexed.push((index, DutySegment::new(clamped_start, clamped_end, status)));
    }

    if !indexed.is_sorted_by(|a, b| a.1.start <= b.1.start) {
        log::warn!("day {day}: segments not sorted by start, re-sorting");
        adjustments.push(SegmentAdjustment::Reordered);
        indexed.sort_by(|a, b| a.1.start.total_cmp(&b.1.start));
    }

    let mut segments: Vec<DutySegment> = Vec::with_capacity(indexed.len());
    let mut cursor = f64::NEG_INFINITY;
    for (index, mut segment) in indexed {
        if segment.start < cursor {
            if segment.end <= cursor {
                log::warn!(
                    "day {day}: dropping segment {index}, fully covered by the previous segment"
                );
                adjustments.push(SegmentAdjustment::Dropped {
                    index,
                    start: segment.start,
                    end: segment.end,
                });
                continue;
            }
            log::warn!(
                "day {day}: segment {index} overlaps the previous one, trimming start {} -> {cursor}",
                segment.start
            );
            adjustments.push(SegmentAdjustment::Trimmed {
                index,
                from: segment.start,
                to: cursor,
            });
            segment.start = cursor;
        }
        cursor = segment.end;
        segments.push(segment);
    }

    if segments.is_empty() {
        return Err(RenderError::EmptySegments { day });
    }

    Ok(Normalized {
        segments,
        adjustments,
    })
}
