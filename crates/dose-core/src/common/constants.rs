//! Dose and length units shared by the conversion engine and the scorer.
//!
//! The base dose unit is the sievert, one joule per kilogram. Tabulated
//! coefficients are in pSv cm^2 and fluences in cm^-2.

pub const JOULE_PER_KILOGRAM: f64 = 1.0;
pub const SIEVERT: f64 = JOULE_PER_KILOGRAM;
pub const MILLISIEVERT: f64 = 1.0e-3 * SIEVERT;
pub const MICROSIEVERT: f64 = 1.0e-6 * SIEVERT;
pub const NANOSIEVERT: f64 = 1.0e-9 * SIEVERT;
pub const PICOSIEVERT: f64 = 1.0e-12 * SIEVERT;

/// Tabulated coefficients are per square centimetre of fluence.
pub const COEFFICIENT_UNIT: f64 = PICOSIEVERT;
