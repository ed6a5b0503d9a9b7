use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectionError};
use crate::geometry::{Bounds, Coordinate, TrackedFeature};
use crate::network::{NearestHit, NearestVertex, NetworkStore};
use crate::operations::query::Progress;
use crate::operations::{Mark, Measure, Unmark, UnmarkOutcome};

use super::history::History;
use super::state::{MeasurementRecord, SelectionState};

/// Engine configuration supplied by the hosting application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Layer name of the features eligible for marking and measurement.
    pub target_layer: String,
    /// Hover highlight threshold in meters.
    pub proximity_threshold: f64,
    /// Overlap tolerance in coordinate degrees.
    pub overlap_epsilon: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_layer: "trench".to_owned(),
            proximity_threshold: 60.0,
            overlap_epsilon: 1e-5,
        }
    }
}

/// What a primary-button drag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Primary drags mark completed work.
    #[default]
    Mark,
    /// Primary drags record measurements.
    Measure,
}

/// Which mouse button initiated a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Result of a resolved drag interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// A mark ran; meters credited to the completed total.
    Marked { length_added: f64 },
    /// An unmark ran.
    Unmarked(UnmarkOutcome),
    /// A measurement ran; `None` when nothing lay inside the rectangle.
    Measured(Option<MeasurementRecord>),
}

/// A rectangle drag between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    anchor: Coordinate,
    cursor: Coordinate,
    button: PointerButton,
}

impl ActiveDrag {
    fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.anchor, self.cursor)
    }
}

/// The selection engine: owns the feature registry, the selection state,
/// and the undo/redo history, and resolves drag interactions into
/// operations.
///
/// All mutation goes through the engine; callers read the state between
/// operations. The engine holds no reference to any rendering surface:
/// mode changes and pointer events arrive as explicit method calls.
#[derive(Debug)]
pub struct SelectionEngine {
    config: EngineConfig,
    store: NetworkStore,
    state: SelectionState,
    history: History,
    mode: Mode,
    drag: Option<ActiveDrag>,
}

impl SelectionEngine {
    /// Creates an engine with no features loaded.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let store = NetworkStore::new(config.target_layer.clone());
        Self {
            config,
            store,
            state: SelectionState::new(0.0),
            history: History::new(),
            mode: Mode::default(),
            drag: None,
        }
    }

    /// Replaces the loaded features and starts a fresh selection session:
    /// the target-layer total is recomputed, and the selection state,
    /// history, and any active drag are reset.
    pub fn load_features(&mut self, features: Vec<TrackedFeature>) {
        self.store.load(features);
        self.state = SelectionState::new(self.store.total_length());
        self.history.clear();
        self.drag = None;
    }

    // --- Interaction state machine ---

    /// Starts a rectangle drag at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns an error if a drag is already in progress.
    pub fn begin_drag(&mut self, anchor: Coordinate, button: PointerButton) -> Result<()> {
        if self.drag.is_some() {
            return Err(SelectionError::DragInProgress.into());
        }
        self.drag = Some(ActiveDrag {
            anchor,
            cursor: anchor,
            button,
        });
        Ok(())
    }

    /// Moves the drag cursor, returning the live rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if no drag is in progress.
    pub fn update_drag(&mut self, cursor: Coordinate) -> Result<Bounds> {
        let drag = self.drag.as_mut().ok_or(SelectionError::NoActiveDrag)?;
        drag.cursor = cursor;
        Ok(drag.bounds())
    }

    /// Ends the drag at `cursor` and resolves it into exactly one
    /// operation: a secondary-button drag unmarks in either mode, a
    /// primary-button drag marks or measures according to the current
    /// mode. Zero-area rectangles resolve normally (to zero length).
    ///
    /// # Errors
    ///
    /// Returns an error if no drag is in progress.
    pub fn end_drag(&mut self, cursor: Coordinate) -> Result<DragOutcome> {
        let mut drag = self.drag.take().ok_or(SelectionError::NoActiveDrag)?;
        drag.cursor = cursor;
        let bounds = drag.bounds();

        let outcome = match (drag.button, self.mode) {
            (PointerButton::Secondary, _) => DragOutcome::Unmarked(self.unmark(bounds)),
            (PointerButton::Primary, Mode::Mark) => DragOutcome::Marked {
                length_added: self.mark(bounds),
            },
            (PointerButton::Primary, Mode::Measure) => {
                DragOutcome::Measured(self.measure(bounds))
            }
        };
        Ok(outcome)
    }

    /// The rectangle of the drag in progress, if any.
    #[must_use]
    pub fn drag_bounds(&self) -> Option<Bounds> {
        self.drag.as_ref().map(ActiveDrag::bounds)
    }

    // --- Operations ---

    /// Marks the target-layer geometry inside `bounds` as completed,
    /// returning the meters credited.
    pub fn mark(&mut self, bounds: Bounds) -> f64 {
        Mark::new(bounds, self.config.overlap_epsilon).execute(
            &self.store,
            &mut self.state,
            &mut self.history,
        )
    }

    /// Reverts the completed marking inside `bounds`.
    pub fn unmark(&mut self, bounds: Bounds) -> UnmarkOutcome {
        Unmark::new(bounds, self.config.overlap_epsilon).execute(
            &self.store,
            &mut self.state,
            &mut self.history,
        )
    }

    /// Records a measurement overlay for `bounds`; `None` when nothing on
    /// the target layer lies inside.
    pub fn measure(&mut self, bounds: Bounds) -> Option<MeasurementRecord> {
        Measure::new(bounds).execute(&self.store, &mut self.state)
    }

    // --- History ---

    /// Reverts the most recent mark/unmark. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.state.snapshot()) {
            Some(snapshot) => {
                self.state.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone mark/unmark. Returns `false`
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.state.snapshot()) {
            Some(snapshot) => {
                self.state.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Whether an undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Queries ---

    /// The nearest tracked feature within the configured proximity
    /// threshold of `cursor`, for hover highlighting.
    #[must_use]
    pub fn hover(&self, cursor: Coordinate) -> Option<NearestHit> {
        NearestVertex::new(cursor)
            .execute(&self.store)
            .filter(|hit| hit.is_within(self.config.proximity_threshold))
    }

    /// The current progress summary.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::compute(&self.state, &self.history)
    }

    /// The mode applied to primary-button drags.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches what primary-button drags do.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Read access to the selection state.
    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Read access to the feature registry.
    #[must_use]
    pub fn store(&self) -> &NetworkStore {
        &self.store
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
