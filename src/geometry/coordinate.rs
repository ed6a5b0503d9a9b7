use serde::{Deserialize, Serialize};

use crate::math::geodesic::haversine_distance;

/// A WGS84 position as a `(longitude, latitude)` pair in degrees.
///
/// Serializes as a two-element `[lon, lat]` array, matching the coordinate
/// order used by GeoJSON-style loaders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Creates a coordinate from longitude and latitude in degrees.
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Great-circle distance in meters to another coordinate.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        haversine_distance(self.lon, self.lat, other.lon, other.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lon, c.lat)
    }
}
