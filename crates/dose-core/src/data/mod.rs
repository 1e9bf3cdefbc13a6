//! Compiled-in coefficient datasets.
//!
//! Raw rows are kept exactly as published; validation into
//! [`CoefficientTable`](crate::conversion::table::CoefficientTable) happens once
//! when the engine is built.

pub mod icrp116;

pub use icrp116::{ICRP_116, ICRP_116_ID, ICRP_116_VERSION};

use crate::conversion::particle::ParticleFamily;
use crate::domain::Geometry;

/// A named, versioned collection of per-family tabulations.
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub id: &'static str,
    pub version: &'static str,
    pub tables: &'static [DatasetTable],
}

impl Dataset {
    pub fn table_for(&self, family: ParticleFamily) -> Option<&'static DatasetTable> {
        self.tables.iter().find(|table| table.family == family)
    }
}

/// One family's raw rows. A geometry without a tabulated row is `None`.
#[derive(Debug, Clone, Copy)]
pub struct DatasetTable {
    pub family: ParticleFamily,
    pub energies: &'static [f64],
    pub ap: Option<&'static [f64]>,
    pub pa: Option<&'static [f64]>,
    pub iso: Option<&'static [f64]>,
}

impl DatasetTable {
    pub fn column(&self, geometry: Geometry) -> Option<&'static [f64]> {
        match geometry {
            Geometry::Ap => self.ap,
            Geometry::Pa => self.pa,
            Geometry::Iso => self.iso,
        }
    }
}
