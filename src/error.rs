use thiserror::Error;

/// Top-level error type for the trenchline engine.
#[derive(Debug, Error)]
pub enum TrenchlineError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    WorkLog(#[from] WorkLogError),
}

/// Errors related to the feature network registry.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("feature not found")]
    FeatureNotFound,
}

/// Errors related to the selection interaction state machine.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("a drag interaction is already in progress")]
    DragInProgress,

    #[error("no drag interaction is in progress")]
    NoActiveDrag,
}

/// Errors related to the work log.
#[derive(Debug, Error)]
pub enum WorkLogError {
    #[error("work record not found: {0}")]
    RecordNotFound(u64),
}

/// Convenience type alias for results using [`TrenchlineError`].
pub type Result<T> = std::result::Result<T, TrenchlineError>;
