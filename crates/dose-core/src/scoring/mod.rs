pub mod accumulator;
pub mod scorer;
pub mod tally;

pub use accumulator::{AccumulatorState, FinalizedEvent, PerEventAccumulator};
pub use scorer::{EffectiveDoseScorer, EventBoundary, EventDoses, StepRecord};
pub use tally::{CellSummary, RunTally};
