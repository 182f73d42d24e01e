//! Value objects - immutable domain values

mod engagement;

pub use engagement::{CounterDelta, EngagementCounts};
