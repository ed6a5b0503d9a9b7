mod mark;
mod measure;
mod unmark;

pub mod query;

pub use mark::Mark;
pub use measure::Measure;
pub use unmark::{Unmark, UnmarkOutcome};
