use crate::geometry::{Coordinate, Segment};
use crate::math::distance_2d::point_to_segment_dist;

/// Whether `p` lies within `epsilon` degrees of `seg`, measured as the
/// planar distance from `p` to its clamped projection onto the segment.
#[must_use]
pub fn point_on_segment(p: Coordinate, seg: &Segment, epsilon: f64) -> bool {
    point_to_segment_dist(
        p.lon,
        p.lat,
        seg.start.lon,
        seg.start.lat,
        seg.end.lon,
        seg.end.lat,
    ) <= epsilon
}

/// Approximate overlap test: true when any endpoint of either segment lies
/// near the other segment.
///
/// This tests endpoint proximity only, not collinear-interval intersection:
/// two collinear segments overlapping mid-span with no endpoint near the
/// other are not detected. Selection reconciliation always works on whole
/// clipped pieces, whose endpoints are the contact points that matter.
#[must_use]
pub fn segments_overlap(a: &Segment, b: &Segment, epsilon: f64) -> bool {
    point_on_segment(a.start, b, epsilon)
        || point_on_segment(a.end, b, epsilon)
        || point_on_segment(b.start, a, epsilon)
        || point_on_segment(b.end, a, epsilon)
}

/// Whether `p` lies near any of the already-selected segments.
#[must_use]
pub fn already_selected(p: Coordinate, selected: &[Segment], epsilon: f64) -> bool {
    selected.iter().any(|seg| point_on_segment(p, seg, epsilon))
}
