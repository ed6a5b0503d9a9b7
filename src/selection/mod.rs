pub mod engine;
pub mod history;
pub mod overlap;
pub mod state;

pub use engine::{DragOutcome, EngineConfig, Mode, PointerButton, SelectionEngine};
pub use history::History;
pub use state::{MeasurementRecord, SelectionState, Snapshot};
