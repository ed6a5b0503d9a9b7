use serde::{Deserialize, Serialize};

use crate::math::geodesic::polyline_length;

use super::{Coordinate, Segment};

/// A named line layer: an ordered polyline plus the layer tag that decides
/// whether the feature participates in selection and measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedFeature {
    pub layer: String,
    pub coordinates: Vec<Coordinate>,
}

impl TrackedFeature {
    /// Creates a feature from a layer name and its polyline vertices.
    #[must_use]
    pub fn new(layer: impl Into<String>, coordinates: Vec<Coordinate>) -> Self {
        Self {
            layer: layer.into(),
            coordinates,
        }
    }

    /// Great-circle length of the feature polyline in meters.
    ///
    /// Returns 0 for features with fewer than two vertices.
    #[must_use]
    pub fn length_m(&self) -> f64 {
        polyline_length(self.coordinates.iter().map(|c| (c.lon, c.lat)))
    }

    /// Iterates the consecutive-vertex segments of the polyline.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.coordinates.windows(2).map(|w| Segment::new(w[0], w[1]))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn length_sums_all_polyline_segments() {
        let feature = TrackedFeature::new(
            "trench",
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 0.001),
                Coordinate::new(0.0, 0.002),
            ],
        );
        assert_relative_eq!(feature.length_m(), 222.39, max_relative = 1e-3);
    }

    #[test]
    fn single_point_feature_has_zero_length_and_no_segments() {
        let feature = TrackedFeature::new("trench", vec![Coordinate::new(0.0, 0.0)]);
        assert!(feature.length_m().abs() < 1e-12);
        assert_eq!(feature.segments().count(), 0);
    }

    #[test]
    fn deserializes_from_geojson_style_coordinates() {
        let feature: TrackedFeature = serde_json::from_str(
            r#"{"layer":"trench","coordinates":[[0.0,0.0],[0.0,0.001]]}"#,
        )
        .unwrap();
        assert_eq!(feature.layer, "trench");
        assert_eq!(feature.coordinates.len(), 2);
        assert_relative_eq!(feature.coordinates[1].lat, 0.001, max_relative = 1e-12);
    }
}
