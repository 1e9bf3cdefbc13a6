use super::interpolation::GridPosition;
use super::particle::ParticleFamily;
use super::table::{CoefficientTable, TableError};
use crate::common::constants::COEFFICIENT_UNIT;
use crate::data::{Dataset, ICRP_116};
use crate::domain::{DoseError, DoseResult, Geometry};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// A looked-up effective dose per fluence coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficient {
    /// pSv cm^2
    pub value: f64,
    pub family: ParticleFamily,
    pub requested_geometry: Geometry,
    /// Column actually read after geometry fallback.
    pub geometry: Geometry,
    pub position: GridPosition,
}

impl Coefficient {
    /// Dose in sievert for the given fluence in cm^-2.
    pub fn dose_sv(&self, fluence_per_cm2: f64) -> f64 {
        DoseConversionEngine::contribution(self.value, fluence_per_cm2)
    }
}

/// Owns the validated coefficient tables of one dataset.
///
/// Immutable after construction and safe to share between workers.
#[derive(Debug, Clone)]
pub struct DoseConversionEngine {
    dataset_id: &'static str,
    dataset_version: &'static str,
    tables: BTreeMap<ParticleFamily, CoefficientTable>,
}

impl DoseConversionEngine {
    pub fn new(dataset: &Dataset) -> Result<Self, TableError> {
        let mut tables = BTreeMap::new();
        for source in dataset.tables {
            let table = CoefficientTable::from_dataset(source)?;
            if tables.insert(source.family, table).is_some() {
                return Err(TableError::DuplicateFamily {
                    family: source.family,
                });
            }
        }

        tracing::debug!(
            dataset = dataset.id,
            version = dataset.version,
            tables = tables.len(),
            "coefficient tables validated"
        );

        Ok(Self {
            dataset_id: dataset.id,
            dataset_version: dataset.version,
            tables,
        })
    }

    pub fn icrp116() -> Result<Self, TableError> {
        Self::new(&ICRP_116)
    }

    /// Process-wide ICRP 116 engine, validated on first use.
    pub fn shared() -> DoseResult<&'static DoseConversionEngine> {
        static SHARED: OnceLock<Result<DoseConversionEngine, TableError>> = OnceLock::new();
        SHARED
            .get_or_init(Self::icrp116)
            .as_ref()
            .map_err(|error| DoseError::from(error.clone()))
    }

    pub fn dataset_id(&self) -> &'static str {
        self.dataset_id
    }

    pub fn dataset_version(&self) -> &'static str {
        self.dataset_version
    }

    pub fn table(&self, family: ParticleFamily) -> Option<&CoefficientTable> {
        self.tables.get(&family)
    }

    pub fn families(&self) -> impl Iterator<Item = ParticleFamily> + '_ {
        self.tables.keys().copied()
    }

    /// Coefficient in pSv cm^2 for a PDG-coded particle.
    ///
    /// `Ok(None)` means the particle has no table and receives no dose
    /// attribution. Energies outside the table are clamped to the nearest
    /// tabulated point. Negative or non-finite energies are rejected.
    pub fn lookup_coefficient(
        &self,
        particle_code: i32,
        energy_mev: f64,
        geometry: Geometry,
    ) -> DoseResult<Option<Coefficient>> {
        let Some(family) = ParticleFamily::from_pdg(particle_code) else {
            tracing::trace!(particle_code, "no coefficient table for particle");
            return Ok(None);
        };
        self.lookup_family(family, energy_mev, geometry)
    }

    pub fn lookup_family(
        &self,
        family: ParticleFamily,
        energy_mev: f64,
        geometry: Geometry,
    ) -> DoseResult<Option<Coefficient>> {
        if !energy_mev.is_finite() || energy_mev < 0.0 {
            return Err(DoseError::input_validation(
                "INPUT.ENERGY",
                format!(
                    "kinetic energy must be finite and >= 0 MeV, got {} for {}",
                    energy_mev, family
                ),
            ));
        }

        let Some(table) = self.tables.get(&family) else {
            tracing::trace!(%family, dataset = self.dataset_id, "family not tabulated");
            return Ok(None);
        };

        let (resolved, sample) = table.interpolate(geometry, energy_mev);
        if sample.position.is_clamped() {
            tracing::trace!(
                %family,
                energy_mev,
                min = table.min_energy(),
                max = table.max_energy(),
                "energy outside tabulated range, clamped"
            );
        }

        Ok(Some(Coefficient {
            value: sample.value,
            family,
            requested_geometry: geometry,
            geometry: resolved,
            position: sample.position,
        }))
    }

    /// Dose increment in sievert (J/kg) from a coefficient in pSv cm^2 and a
    /// fluence in cm^-2.
    pub fn contribution(coefficient: f64, fluence_per_cm2: f64) -> f64 {
        coefficient * fluence_per_cm2 * COEFFICIENT_UNIT
    }
}
