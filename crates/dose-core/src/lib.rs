//! Effective dose scoring from ICRP 116 fluence-to-dose conversion coefficients.
//!
//! [`DoseConversionEngine`] turns a particle, kinetic energy and irradiation
//! geometry into a coefficient by log-log interpolation of the compiled-in
//! tables. [`EffectiveDoseScorer`] applies it to transport steps and keeps a
//! sparse per-event dose map keyed by detector copy index.

pub mod common;
pub mod conversion;
pub mod data;
pub mod domain;
pub mod scoring;

pub use common::config::{ConfigError, ScorerConfig, load_scorer_config};
pub use conversion::{Coefficient, DoseConversionEngine, ParticleFamily};
pub use domain::{DoseError, DoseErrorCategory, DoseResult, DoseUnit, Geometry};
pub use scoring::{EffectiveDoseScorer, EventBoundary, EventDoses, RunTally, StepRecord};
