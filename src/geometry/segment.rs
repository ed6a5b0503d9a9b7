use serde::{Deserialize, Serialize};

use super::Coordinate;

/// An ordered pair of coordinates: a clipped or selected sub-portion of a
/// tracked line.
///
/// Degenerate (zero-length) segments are legal and contribute zero length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Segment {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Great-circle length of the segment in meters.
    #[must_use]
    pub fn length_m(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Coordinate midway between the endpoints.
    #[must_use]
    #[allow(clippy::manual_midpoint)]
    pub fn midpoint(&self) -> Coordinate {
        Coordinate::new(
            (self.start.lon + self.end.lon) / 2.0,
            (self.start.lat + self.end.lat) / 2.0,
        )
    }
}
