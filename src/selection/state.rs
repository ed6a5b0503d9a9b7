use serde::{Deserialize, Serialize};

use crate::geometry::{Coordinate, Segment};

/// A length-measurement overlay: the clipped segments inside a measured
/// rectangle, their total length, and an anchor for the overlay label.
///
/// Measurements are informational only and never affect the completed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub segments: Vec<Segment>,
    /// Total great-circle length in meters of `segments`.
    pub length: f64,
    /// Mean of the segment midpoints.
    pub center: Coordinate,
}

/// Immutable copy of the marking-relevant selection state, used for
/// undo/redo.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub completed_length: f64,
    pub selected_segments: Vec<Segment>,
}

/// Mutable state of the selection engine.
///
/// `completed_length` is kept equal to the summed length of
/// `selected_segments` (up to floating-point accumulation), clamped to
/// `[0, total_length]`. `total_length` is fixed when the state is created
/// from a loaded network and never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_segments: Vec<Segment>,
    completed_length: f64,
    total_length: f64,
    measurements: Vec<MeasurementRecord>,
}

impl SelectionState {
    /// Creates a fresh state for a network with the given target-layer
    /// total length in meters.
    #[must_use]
    pub fn new(total_length: f64) -> Self {
        Self {
            total_length,
            ..Self::default()
        }
    }

    /// The segments currently marked as completed.
    #[must_use]
    pub fn selected_segments(&self) -> &[Segment] {
        &self.selected_segments
    }

    /// Completed length in meters.
    #[must_use]
    pub fn completed_length(&self) -> f64 {
        self.completed_length
    }

    /// Target-layer total length in meters, fixed at load time.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// The measurement overlays recorded so far.
    #[must_use]
    pub fn measurements(&self) -> &[MeasurementRecord] {
        &self.measurements
    }

    /// Copies the marking-relevant fields into an immutable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            completed_length: self.completed_length,
            selected_segments: self.selected_segments.clone(),
        }
    }

    /// Restores the marking-relevant fields from a snapshot. Measurements
    /// are not part of history and stay untouched.
    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.completed_length = snapshot.completed_length;
        self.selected_segments = snapshot.selected_segments;
    }

    /// Appends freshly accepted segments and credits their length, clamped
    /// so the completed total never exceeds the network total. Returns the
    /// delta actually applied.
    pub(crate) fn apply_mark(&mut self, accepted: Vec<Segment>) -> f64 {
        let added: f64 = accepted.iter().map(Segment::length_m).sum();
        self.selected_segments.extend(accepted);

        let before = self.completed_length;
        self.completed_length = (before + added).min(self.total_length);
        self.completed_length - before
    }

    /// Removes the selected segments at the given sorted, deduplicated
    /// indices and debits their length, clamped at zero. Returns the delta
    /// actually applied (as a positive length).
    pub(crate) fn apply_unmark(&mut self, indices: &[usize]) -> f64 {
        let mut removed = 0.0;
        // Walk back-to-front so earlier indices stay valid.
        for &i in indices.iter().rev() {
            if i < self.selected_segments.len() {
                removed += self.selected_segments.remove(i).length_m();
            }
        }

        let before = self.completed_length;
        self.completed_length = (before - removed).max(0.0);
        before - self.completed_length
    }

    /// Appends a measurement overlay.
    pub(crate) fn push_measurement(&mut self, record: MeasurementRecord) {
        self.measurements.push(record);
    }

    /// Drops the measurement overlays rejected by the predicate.
    pub(crate) fn retain_measurements(&mut self, keep: impl FnMut(&MeasurementRecord) -> bool) {
        self.measurements.retain(keep);
    }
}
