use serde::{Deserialize, Serialize};

use crate::math::clip_2d::clip_segment_2d;

use super::{Coordinate, Segment};

/// Axis-aligned geographic bounds in degrees.
///
/// Always normalized: `south <= north` and `west <= east`. Zero-area bounds
/// (coincident corners) are legal and clip to at most single points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Creates bounds from any two opposite corners, normalizing the sides
    /// so the corner order does not matter.
    #[must_use]
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        Self {
            south: a.lat.min(b.lat),
            west: a.lon.min(b.lon),
            north: a.lat.max(b.lat),
            east: a.lon.max(b.lon),
        }
    }

    /// Whether the coordinate lies inside the closed bounds.
    #[must_use]
    pub fn contains(&self, c: Coordinate) -> bool {
        c.lon >= self.west && c.lon <= self.east && c.lat >= self.south && c.lat <= self.north
    }

    /// Clips a segment against the bounds, returning the sub-segment inside
    /// them, or `None` if no part of the segment lies inside.
    #[must_use]
    pub fn clip(&self, seg: &Segment) -> Option<Segment> {
        let (x0, y0, x1, y1) = clip_segment_2d(
            seg.start.lon,
            seg.start.lat,
            seg.end.lon,
            seg.end.lat,
            self.west,
            self.south,
            self.east,
            self.north,
        )?;
        Some(Segment::new(
            Coordinate::new(x0, y0),
            Coordinate::new(x1, y1),
        ))
    }
}
