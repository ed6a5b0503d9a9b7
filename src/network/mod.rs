mod proximity;
mod store;

pub use proximity::{NearestHit, NearestVertex};
pub use store::{FeatureId, NetworkStore};
