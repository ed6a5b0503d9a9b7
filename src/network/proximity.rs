use crate::geometry::Coordinate;

use super::{FeatureId, NetworkStore};

/// Result of a nearest-vertex query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestHit {
    /// The feature owning the nearest vertex.
    pub feature: FeatureId,
    /// Great-circle distance in meters from the cursor to that vertex.
    pub distance: f64,
}

impl NearestHit {
    /// Whether the hit is close enough to count as a hover match.
    #[must_use]
    pub fn is_within(&self, threshold_m: f64) -> bool {
        self.distance <= threshold_m
    }
}

/// Finds the registered feature with the vertex nearest to a cursor
/// position, scanning every vertex of every layer.
pub struct NearestVertex {
    cursor: Coordinate,
}

impl NearestVertex {
    /// Creates a new `NearestVertex` query.
    #[must_use]
    pub fn new(cursor: Coordinate) -> Self {
        Self { cursor }
    }

    /// Executes the query, returning the nearest feature and its distance.
    ///
    /// Returns `None` when the store holds no vertices.
    #[must_use]
    pub fn execute(&self, store: &NetworkStore) -> Option<NearestHit> {
        let mut best: Option<NearestHit> = None;
        for (id, feature) in store.iter() {
            for &vertex in &feature.coordinates {
                let distance = self.cursor.distance_to(vertex);
                if best.is_none_or(|b| distance < b.distance) {
                    best = Some(NearestHit {
                        feature: id,
                        distance,
                    });
                }
            }
        }
        best
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::TrackedFeature;

    fn store_with_two_lines() -> NetworkStore {
        let mut store = NetworkStore::new("trench");
        store.load(vec![
            TrackedFeature::new(
                "trench",
                vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)],
            ),
            TrackedFeature::new(
                "text",
                vec![Coordinate::new(0.01, 0.0), Coordinate::new(0.01, 0.001)],
            ),
        ]);
        store
    }

    #[test]
    fn finds_the_globally_nearest_vertex() {
        let store = store_with_two_lines();
        let hit = NearestVertex::new(Coordinate::new(0.0001, 0.0))
            .execute(&store)
            .unwrap();
        assert_eq!(store.feature(hit.feature).unwrap().layer, "trench");
        // ~11 m from the first vertex of the trench line.
        assert!(hit.distance < 15.0, "distance={}", hit.distance);
    }

    #[test]
    fn context_layers_are_also_tracked() {
        let store = store_with_two_lines();
        let hit = NearestVertex::new(Coordinate::new(0.0101, 0.0005))
            .execute(&store)
            .unwrap();
        assert_eq!(store.feature(hit.feature).unwrap().layer, "text");
    }

    #[test]
    fn empty_store_yields_none() {
        let store = NetworkStore::new("trench");
        assert!(NearestVertex::new(Coordinate::new(0.0, 0.0))
            .execute(&store)
            .is_none());
    }

    #[test]
    fn threshold_decides_the_hover_match() {
        let store = store_with_two_lines();
        let hit = NearestVertex::new(Coordinate::new(0.0001, 0.0))
            .execute(&store)
            .unwrap();
        assert!(hit.is_within(60.0));
        assert!(!hit.is_within(1.0));
    }
}
