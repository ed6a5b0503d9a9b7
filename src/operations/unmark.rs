use std::collections::BTreeSet;

use log::debug;

use crate::geometry::{Bounds, Segment, TrackedFeature};
use crate::network::NetworkStore;
use crate::selection::overlap::segments_overlap;
use crate::selection::{History, SelectionState};

/// Outcome of an [`Unmark`] operation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmarkOutcome {
    /// Length in meters debited from the completed total.
    pub length_removed: f64,
    /// Pre-removal indices of the selected segments that were removed,
    /// ascending and deduplicated.
    pub removed_indices: Vec<usize>,
}

/// Reverts the completed marking inside a rectangle.
pub struct Unmark {
    bounds: Bounds,
    epsilon: f64,
}

impl Unmark {
    /// Creates a new `Unmark` operation with the given overlap tolerance in
    /// degrees.
    #[must_use]
    pub fn new(bounds: Bounds, epsilon: f64) -> Self {
        Self { bounds, epsilon }
    }

    /// Executes the operation, removing every selected segment that
    /// overlaps a rectangle-clipped piece of the target layer, with the
    /// debit clamped so the completed total never drops below zero.
    ///
    /// Measurement overlays overlapping the clipped pieces are dropped as
    /// well; that removal does not touch the completed total.
    ///
    /// A snapshot of the pre-operation state is pushed onto `history`
    /// before any mutation, discarding pending redo entries.
    pub fn execute(
        &self,
        store: &NetworkStore,
        state: &mut SelectionState,
        history: &mut History,
    ) -> UnmarkOutcome {
        history.push(state.snapshot());

        let pieces: Vec<Segment> = store
            .target_features()
            .flat_map(TrackedFeature::segments)
            .filter_map(|seg| self.bounds.clip(&seg))
            .collect();

        let mut indices = BTreeSet::new();
        for piece in &pieces {
            for (i, selected) in state.selected_segments().iter().enumerate() {
                if segments_overlap(piece, selected, self.epsilon) {
                    indices.insert(i);
                }
            }
        }

        let removed_indices: Vec<usize> = indices.into_iter().collect();
        let length_removed = state.apply_unmark(&removed_indices);

        state.retain_measurements(|record| {
            !record
                .segments
                .iter()
                .any(|seg| pieces.iter().any(|piece| segments_overlap(seg, piece, self.epsilon)))
        });

        debug!(
            "unmark: removed {} segment(s), {length_removed:.2} m debited",
            removed_indices.len()
        );
        UnmarkOutcome {
            length_removed,
            removed_indices,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;
    use crate::operations::{Mark, Measure};
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-5;

    fn loaded_store() -> NetworkStore {
        let mut store = NetworkStore::new("trench");
        store.load(vec![TrackedFeature::new(
            "trench",
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)],
        )]);
        store
    }

    fn full_extent() -> Bounds {
        Bounds::from_corners(Coordinate::new(-0.001, -0.001), Coordinate::new(0.001, 0.002))
    }

    #[test]
    fn unmark_inverts_a_mark() {
        let store = loaded_store();
        let mut state = SelectionState::new(store.total_length());
        let mut history = History::new();

        let added = Mark::new(full_extent(), EPS).execute(&store, &mut state, &mut history);
        let outcome = Unmark::new(full_extent(), EPS).execute(&store, &mut state, &mut history);

        assert_relative_eq!(outcome.length_removed, added, max_relative = 1e-9);
        assert_eq!(outcome.removed_indices, vec![0]);
        assert!(state.completed_length().abs() < 1e-9);
        assert!(state.selected_segments().is_empty());
    }

    #[test]
    fn unmark_outside_the_selection_removes_nothing() {
        let store = loaded_store();
        let mut state = SelectionState::new(store.total_length());
        let mut history = History::new();

        Mark::new(full_extent(), EPS).execute(&store, &mut state, &mut history);
        let far = Bounds::from_corners(Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0));
        let outcome = Unmark::new(far, EPS).execute(&store, &mut state, &mut history);

        assert!(outcome.length_removed.abs() < 1e-12);
        assert!(outcome.removed_indices.is_empty());
        assert_eq!(state.selected_segments().len(), 1);
    }

    #[test]
    fn overlapping_indices_are_deduplicated() {
        // Two coincident features produce two clipped pieces matching the
        // same selected segments; each index must still appear only once.
        let mut store = NetworkStore::new("trench");
        let line = vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)];
        store.load(vec![
            TrackedFeature::new("trench", line.clone()),
            TrackedFeature::new("trench", line),
        ]);
        let mut state = SelectionState::new(store.total_length());
        let mut history = History::new();

        Mark::new(full_extent(), EPS).execute(&store, &mut state, &mut history);
        let outcome = Unmark::new(full_extent(), EPS).execute(&store, &mut state, &mut history);

        let mut sorted = outcome.removed_indices.clone();
        sorted.dedup();
        assert_eq!(sorted, outcome.removed_indices);
        assert!(state.selected_segments().is_empty());
    }

    #[test]
    fn unmark_drops_overlapping_measurements() {
        let store = loaded_store();
        let mut state = SelectionState::new(store.total_length());
        let mut history = History::new();

        Measure::new(full_extent()).execute(&store, &mut state);
        assert_eq!(state.measurements().len(), 1);

        let before = state.completed_length();
        Unmark::new(full_extent(), EPS).execute(&store, &mut state, &mut history);
        assert!(state.measurements().is_empty());
        // Measurement removal never touches the completed total.
        assert_relative_eq!(state.completed_length(), before, max_relative = 1e-12);
    }
}
