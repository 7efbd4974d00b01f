//! Coincidence of several anga spans.

use crate::anga_types::AngaSpan;

/// Common interval of all `spans`: `(max(starts), min(ends))`.
///
/// `None` when any span is unresolved or the intersection is empty.
pub fn conjunction_window(spans: &[AngaSpan]) -> Option<(f64, f64)> {
    let mut start = f64::NEG_INFINITY;
    let mut end = f64::INFINITY;
    for span in spans {
        let (s, e) = span.bounds()?;
        start = start.max(s);
        end = end.min(e);
    }
    (!spans.is_empty() && start < end).then_some((start, end))
}

/// Length of the overlap of two closed intervals, 0 if disjoint.
pub fn overlap_days(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.1.min(b.1) - a.0.max(b.0)).max(0.0)
}
