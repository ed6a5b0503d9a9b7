use super::state::Snapshot;

/// Linear undo/redo stacks of selection snapshots.
///
/// Depth is unbounded; the selection state is small enough that full
/// snapshots stay cheap.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pre-operation snapshot, discarding any pending redo
    /// entries.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Pops the most recent snapshot, parking `current` on the redo stack.
    ///
    /// Returns `None` (and leaves both stacks untouched) when there is
    /// nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Pops the most recently undone snapshot, parking `current` on the
    /// undo stack.
    ///
    /// Returns `None` (and leaves both stacks untouched) when there is
    /// nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    /// Whether an undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Drops both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn snap(completed: f64) -> Snapshot {
        Snapshot {
            completed_length: completed,
            selected_segments: Vec::new(),
        }
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut history = History::new();
        assert!(history.undo(snap(1.0)).is_none());
        assert!(!history.can_redo());
    }

    #[test]
    fn redo_on_empty_history_is_a_noop() {
        let mut history = History::new();
        assert!(history.redo(snap(1.0)).is_none());
        assert!(!history.can_undo());
    }

    #[test]
    fn push_clears_pending_redo() {
        let mut history = History::new();
        history.push(snap(0.0));
        let _ = history.undo(snap(1.0));
        assert!(history.can_redo());

        history.push(snap(2.0));
        assert!(!history.can_redo());
        assert!(history.can_undo());
    }

    #[test]
    fn undo_redo_swap_the_current_snapshot() {
        let mut history = History::new();
        history.push(snap(0.0));

        let previous = history.undo(snap(1.0)).unwrap();
        assert!((previous.completed_length - 0.0).abs() < 1e-12);

        let next = history.redo(previous).unwrap();
        assert!((next.completed_length - 1.0).abs() < 1e-12);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn clear_drops_both_stacks() {
        let mut history = History::new();
        history.push(snap(0.0));
        let _ = history.undo(snap(1.0));
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
