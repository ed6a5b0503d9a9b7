use super::{Point2, Vector2};

/// Returns the minimum distance from point `(px, py)` to the line segment
/// from `(ax, ay)` to `(bx, by)`, in the same planar units as the inputs.
#[must_use]
pub fn point_to_segment_dist(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let p = Point2::new(px, py);
    let a = Point2::new(ax, ay);
    let b = Point2::new(bx, by);

    let ab: Vector2 = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);

    let closest = a + ab * t;
    (p - closest).norm()
}
