use eld_log_protocol::{DutySegment, DutyTotals};

/// Hours per duty status. Statuses with no segments total zero; segments
/// with `end <= start` contribute nothing.
pub fn compute_totals(segments: &[DutySegment]) -> DutyTotals {
    let mut totals = DutyTotals::default();
    for segment in segments.iter().filter(|s| s.end > s.start) {
        totals[segment.status] += segment.duration();
    }
    totals
}
