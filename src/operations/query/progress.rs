use serde::Serialize;

use crate::selection::{History, SelectionState};

/// Derived progress summary over the selection state, for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    /// Completed length in meters.
    pub completed_length: f64,
    /// Target-layer total length in meters.
    pub total_length: f64,
    /// Meters still to complete; never negative.
    pub remaining_length: f64,
    /// Completed share in percent; 0 when the network is empty.
    pub completed_percentage: f64,
    /// Whether an undo is available.
    pub can_undo: bool,
    /// Whether a redo is available.
    pub can_redo: bool,
}

impl Progress {
    /// Computes the summary for the given state and history.
    #[must_use]
    pub fn compute(state: &SelectionState, history: &History) -> Self {
        let completed = state.completed_length();
        let total = state.total_length();
        let completed_percentage = if total > 0.0 {
            completed / total * 100.0
        } else {
            0.0
        };
        Self {
            completed_length: completed,
            total_length: total,
            remaining_length: (total - completed).max(0.0),
            completed_percentage,
            can_undo: history.can_undo(),
            can_redo: history.can_redo(),
        }
    }
}
