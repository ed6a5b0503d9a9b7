use log::info;
use slotmap::{new_key_type, SlotMap};

use crate::error::NetworkError;
use crate::geometry::TrackedFeature;

new_key_type! {
    /// Stable key identifying a registered feature.
    pub struct FeatureId;
}

/// Central registry that owns all loaded line features.
///
/// Features are keyed by generational ids; `load` replaces the registry
/// wholesale, invalidating ids from the previous load. Every feature is
/// registered (context layers included), but only features on the target
/// layer contribute to the network total and are eligible for selection.
#[derive(Debug)]
pub struct NetworkStore {
    features: SlotMap<FeatureId, TrackedFeature>,
    target_layer: String,
    total_length: f64,
}

impl NetworkStore {
    /// Creates an empty store with the given target-layer name.
    #[must_use]
    pub fn new(target_layer: impl Into<String>) -> Self {
        Self {
            features: SlotMap::with_key(),
            target_layer: target_layer.into(),
            total_length: 0.0,
        }
    }

    /// Replaces the registry contents and recomputes the target-layer total.
    pub fn load(&mut self, features: Vec<TrackedFeature>) {
        self.features.clear();
        for feature in features {
            self.features.insert(feature);
        }
        self.total_length = self
            .target_features()
            .map(TrackedFeature::length_m)
            .sum();
        info!(
            "loaded {} feature(s), target layer \"{}\" total {:.2} m",
            self.features.len(),
            self.target_layer,
            self.total_length
        );
    }

    /// Returns a reference to the feature data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not refer to a loaded feature.
    pub fn feature(&self, id: FeatureId) -> Result<&TrackedFeature, NetworkError> {
        self.features.get(id).ok_or(NetworkError::FeatureNotFound)
    }

    /// Iterates all registered features with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureId, &TrackedFeature)> {
        self.features.iter()
    }

    /// Iterates the features on the target layer.
    pub fn target_features(&self) -> impl Iterator<Item = &TrackedFeature> {
        self.features
            .values()
            .filter(move |f| f.layer == self.target_layer)
    }

    /// The configured target-layer name.
    #[must_use]
    pub fn target_layer(&self) -> &str {
        &self.target_layer
    }

    /// Total great-circle length in meters of the target-layer geometry,
    /// computed at load time.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Number of registered features (all layers).
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the store holds no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
