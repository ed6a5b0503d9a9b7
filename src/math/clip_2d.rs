use super::TOLERANCE;

/// Cohen–Sutherland region outcodes.
///
/// A point's outcode is the OR of the bits for every boundary it violates;
/// `0` means the point is inside the closed rectangle.
pub const INSIDE: u8 = 0b0000;
pub const LEFT: u8 = 0b0001;
pub const RIGHT: u8 = 0b0010;
pub const BOTTOM: u8 = 0b0100;
pub const TOP: u8 = 0b1000;

/// Computes the Cohen–Sutherland outcode of `(x, y)` against the rectangle
/// `[min_x, max_x] × [min_y, max_y]`.
#[must_use]
pub fn compute_outcode(x: f64, y: f64, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> u8 {
    let mut code = INSIDE;
    if x < min_x {
        code |= LEFT;
    } else if x > max_x {
        code |= RIGHT;
    }
    if y < min_y {
        code |= BOTTOM;
    } else if y > max_y {
        code |= TOP;
    }
    code
}

/// Clips the segment `(x0, y0)→(x1, y1)` against the axis-aligned rectangle
/// `[min_x, max_x] × [min_y, max_y]` using the Cohen–Sutherland algorithm.
///
/// Returns the sub-segment lying inside the closed rectangle, or `None` if
/// no part of the segment does. Endpoints exactly on a boundary count as
/// inside. A segment parallel to the boundary it would have to cross (zero
/// denominator in the intersection formula) is rejected rather than divided
/// by zero.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn clip_segment_2d(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
) -> Option<(f64, f64, f64, f64)> {
    let mut x0 = x0;
    let mut y0 = y0;
    let mut x1 = x1;
    let mut y1 = y1;

    let mut code0 = compute_outcode(x0, y0, min_x, min_y, max_x, max_y);
    let mut code1 = compute_outcode(x1, y1, min_x, min_y, max_x, max_y);

    loop {
        if code0 | code1 == INSIDE {
            // Both endpoints inside: trivial accept.
            return Some((x0, y0, x1, y1));
        }
        if code0 & code1 != INSIDE {
            // Both endpoints share a violated side: trivial reject.
            return None;
        }

        // At least one endpoint is outside; intersect the segment with the
        // first boundary that endpoint violates.
        let code_out = if code0 != INSIDE { code0 } else { code1 };

        let (x, y) = if code_out & TOP != INSIDE {
            let dy = y1 - y0;
            if dy.abs() < TOLERANCE {
                // A horizontal segment cannot cross a horizontal boundary.
                return None;
            }
            (x0 + (x1 - x0) * (max_y - y0) / dy, max_y)
        } else if code_out & BOTTOM != INSIDE {
            let dy = y1 - y0;
            if dy.abs() < TOLERANCE {
                return None;
            }
            (x0 + (x1 - x0) * (min_y - y0) / dy, min_y)
        } else if code_out & RIGHT != INSIDE {
            let dx = x1 - x0;
            if dx.abs() < TOLERANCE {
                // A vertical segment cannot cross a vertical boundary.
                return None;
            }
            (max_x, y0 + (y1 - y0) * (max_x - x0) / dx)
        } else {
            let dx = x1 - x0;
            if dx.abs() < TOLERANCE {
                return None;
            }
            (min_x, y0 + (y1 - y0) * (min_x - x0) / dx)
        };

        // Move the outside endpoint onto the boundary and re-classify it.
        if code_out == code0 {
            x0 = x;
            y0 = y;
            code0 = compute_outcode(x0, y0, min_x, min_y, max_x, max_y);
        } else {
            x1 = x;
            y1 = y;
            code1 = compute_outcode(x1, y1, min_x, min_y, max_x, max_y);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn outcode_classifies_all_nine_regions() {
        let oc = |x, y| compute_outcode(x, y, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(oc(5.0, 5.0), INSIDE);
        assert_eq!(oc(-1.0, 5.0), LEFT);
        assert_eq!(oc(11.0, 5.0), RIGHT);
        assert_eq!(oc(5.0, -1.0), BOTTOM);
        assert_eq!(oc(5.0, 11.0), TOP);
        assert_eq!(oc(-1.0, -1.0), LEFT | BOTTOM);
        assert_eq!(oc(-1.0, 11.0), LEFT | TOP);
        assert_eq!(oc(11.0, -1.0), RIGHT | BOTTOM);
        assert_eq!(oc(11.0, 11.0), RIGHT | TOP);
    }

    #[test]
    fn outcode_boundary_points_are_inside() {
        assert_eq!(compute_outcode(0.0, 0.0, 0.0, 0.0, 10.0, 10.0), INSIDE);
        assert_eq!(compute_outcode(10.0, 10.0, 0.0, 0.0, 10.0, 10.0), INSIDE);
    }

    #[test]
    fn fully_inside_segment_is_unchanged() {
        let (x0, y0, x1, y1) =
            clip_segment_2d(1.0, 1.0, 9.0, 9.0, 0.0, 0.0, 10.0, 10.0).unwrap();
        assert!((x0 - 1.0).abs() < TOL);
        assert!((y0 - 1.0).abs() < TOL);
        assert!((x1 - 9.0).abs() < TOL);
        assert!((y1 - 9.0).abs() < TOL);
    }

    #[test]
    fn segment_crossing_both_sides_is_trimmed() {
        // Horizontal segment crossing the whole rectangle at y = 5.
        let (x0, y0, x1, y1) =
            clip_segment_2d(-5.0, 5.0, 15.0, 5.0, 0.0, 0.0, 10.0, 10.0).unwrap();
        assert!((x0 - 0.0).abs() < TOL);
        assert!((y0 - 5.0).abs() < TOL);
        assert!((x1 - 10.0).abs() < TOL);
        assert!((y1 - 5.0).abs() < TOL);
    }

    #[test]
    fn one_endpoint_inside_is_trimmed_at_the_boundary() {
        let (x0, y0, x1, y1) =
            clip_segment_2d(5.0, 5.0, 5.0, 15.0, 0.0, 0.0, 10.0, 10.0).unwrap();
        assert!((x0 - 5.0).abs() < TOL);
        assert!((y0 - 5.0).abs() < TOL);
        assert!((x1 - 5.0).abs() < TOL);
        assert!((y1 - 10.0).abs() < TOL);
    }

    #[test]
    fn diagonal_segment_is_clipped_on_both_ends() {
        let (x0, y0, x1, y1) =
            clip_segment_2d(-10.0, -10.0, 20.0, 20.0, 0.0, 0.0, 10.0, 10.0).unwrap();
        assert!((x0 - 0.0).abs() < TOL);
        assert!((y0 - 0.0).abs() < TOL);
        assert!((x1 - 10.0).abs() < TOL);
        assert!((y1 - 10.0).abs() < TOL);
    }

    #[test]
    fn segment_entirely_left_is_rejected() {
        assert!(clip_segment_2d(-5.0, 1.0, -1.0, 9.0, 0.0, 0.0, 10.0, 10.0).is_none());
    }

    #[test]
    fn diagonal_near_miss_is_rejected() {
        // Passes above the top-left corner without entering.
        assert!(clip_segment_2d(-2.0, 9.0, 1.0, 14.0, 0.0, 0.0, 10.0, 10.0).is_none());
    }

    #[test]
    fn vertical_segment_outside_is_rejected_without_division() {
        // Vertical segment left of the rectangle, spanning it vertically:
        // clipping against TOP/BOTTOM leaves it violating LEFT with dx = 0.
        assert!(clip_segment_2d(-1.0, -5.0, -1.0, 15.0, 0.0, 0.0, 10.0, 10.0).is_none());
    }

    #[test]
    fn horizontal_segment_outside_is_rejected_without_division() {
        assert!(clip_segment_2d(-5.0, 11.0, 15.0, 11.0, 0.0, 0.0, 10.0, 10.0).is_none());
    }

    #[test]
    fn degenerate_segment_inside_is_accepted() {
        let (x0, y0, x1, y1) =
            clip_segment_2d(5.0, 5.0, 5.0, 5.0, 0.0, 0.0, 10.0, 10.0).unwrap();
        assert!((x0 - x1).abs() < TOL && (y0 - y1).abs() < TOL);
    }

    #[test]
    fn degenerate_segment_outside_is_rejected() {
        assert!(clip_segment_2d(15.0, 5.0, 15.0, 5.0, 0.0, 0.0, 10.0, 10.0).is_none());
    }

    #[test]
    fn zero_area_rectangle_accepts_only_points_on_it() {
        // The rectangle degenerates to the single point (5, 5).
        assert!(clip_segment_2d(5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0).is_some());
        assert!(clip_segment_2d(4.0, 4.0, 4.5, 4.5, 5.0, 5.0, 5.0, 5.0).is_none());
    }
}
