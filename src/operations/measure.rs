use log::debug;

use crate::geometry::{Bounds, Coordinate, Segment, TrackedFeature};
use crate::network::NetworkStore;
use crate::selection::{MeasurementRecord, SelectionState};

/// Measures the target-layer length inside a rectangle without touching the
/// completed marking.
pub struct Measure {
    bounds: Bounds,
}

impl Measure {
    /// Creates a new `Measure` operation.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Executes the measurement, appending an overlay record to the state
    /// and returning a copy of it.
    ///
    /// The record holds every rectangle-clipped piece of the target layer,
    /// their summed length, and the mean of the piece midpoints as the
    /// label anchor. Returns `None` (and records nothing) when no part of
    /// the target layer lies inside the bounds. Measurements never enter
    /// the undo/redo history.
    pub fn execute(
        &self,
        store: &NetworkStore,
        state: &mut SelectionState,
    ) -> Option<MeasurementRecord> {
        let segments: Vec<Segment> = store
            .target_features()
            .flat_map(TrackedFeature::segments)
            .filter_map(|seg| self.bounds.clip(&seg))
            .collect();

        if segments.is_empty() {
            return None;
        }

        let length: f64 = segments.iter().map(Segment::length_m).sum();

        let (lon_sum, lat_sum) = segments
            .iter()
            .map(Segment::midpoint)
            .fold((0.0, 0.0), |(lon, lat), mid| (lon + mid.lon, lat + mid.lat));
        #[allow(clippy::cast_precision_loss)]
        let n = segments.len() as f64;
        let center = Coordinate::new(lon_sum / n, lat_sum / n);

        let record = MeasurementRecord {
            segments,
            length,
            center,
        };
        state.push_measurement(record.clone());
        debug!(
            "measure: {} piece(s), {length:.2} m",
            record.segments.len()
        );
        Some(record)
    }
}
