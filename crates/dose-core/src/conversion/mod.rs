pub mod engine;
pub mod interpolation;
pub mod particle;
pub mod table;

pub use engine::{Coefficient, DoseConversionEngine};
pub use interpolation::{GridPosition, LogLogSample, interpolate_log_log};
pub use particle::ParticleFamily;
pub use table::{CoefficientTable, TableError, fallback_order};
