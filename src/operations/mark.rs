use log::debug;

use crate::geometry::{Bounds, Segment};
use crate::network::NetworkStore;
use crate::selection::overlap::already_selected;
use crate::selection::{History, SelectionState};

/// Marks the target-layer geometry inside a rectangle as completed.
pub struct Mark {
    bounds: Bounds,
    epsilon: f64,
}

impl Mark {
    /// Creates a new `Mark` operation with the given overlap tolerance in
    /// degrees.
    #[must_use]
    pub fn new(bounds: Bounds, epsilon: f64) -> Self {
        Self { bounds, epsilon }
    }

    /// Executes the operation, returning the length in meters actually
    /// credited to the completed total.
    ///
    /// Every target-layer segment is clipped against the bounds. A clipped
    /// piece whose endpoints both lie on already-selected geometry is fully
    /// redundant and skipped; any other piece is accepted whole. The credit
    /// is clamped so the completed total never exceeds the network total.
    ///
    /// A snapshot of the pre-operation state is pushed onto `history`
    /// before any mutation, discarding pending redo entries.
    pub fn execute(
        &self,
        store: &NetworkStore,
        state: &mut SelectionState,
        history: &mut History,
    ) -> f64 {
        history.push(state.snapshot());

        let mut accepted: Vec<Segment> = Vec::new();
        for feature in store.target_features() {
            for seg in feature.segments() {
                let Some(clipped) = self.bounds.clip(&seg) else {
                    continue;
                };

                // Redundant only if both endpoints are covered by earlier
                // selections or by pieces accepted within this operation.
                let covered = |p| {
                    already_selected(p, state.selected_segments(), self.epsilon)
                        || already_selected(p, &accepted, self.epsilon)
                };
                if covered(clipped.start) && covered(clipped.end) {
                    continue;
                }
                accepted.push(clipped);
            }
        }

        let piece_count = accepted.len();
        let added = state.apply_mark(accepted);
        debug!("mark: accepted {piece_count} piece(s), {added:.2} m added");
        added
    }
}
