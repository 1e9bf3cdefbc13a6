use super::interpolation::{LogLogSample, interpolate_log_log};
use super::particle::ParticleFamily;
use crate::data::DatasetTable;
use crate::domain::{DoseError, Geometry};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("{family} table needs at least 2 energy points, got {actual}")]
    InsufficientPoints {
        family: ParticleFamily,
        actual: usize,
    },
    #[error("{family} table has no coefficient column for any geometry")]
    NoColumns { family: ParticleFamily },
    #[error(
        "{family} {geometry} column has {coefficients} coefficients for {energies} energy points"
    )]
    LengthMismatch {
        family: ParticleFamily,
        geometry: Geometry,
        energies: usize,
        coefficients: usize,
    },
    #[error("{family} energy at index {index} must be finite and > 0, got {value}")]
    InvalidEnergy {
        family: ParticleFamily,
        index: usize,
        value: f64,
    },
    #[error(
        "{family} energies must be strictly increasing, index {index} has {current} after {previous}"
    )]
    NonIncreasingEnergy {
        family: ParticleFamily,
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("{family} {geometry} coefficient at index {index} must be finite and > 0, got {value}")]
    InvalidCoefficient {
        family: ParticleFamily,
        geometry: Geometry,
        index: usize,
        value: f64,
    },
    #[error("{family} is tabulated more than once")]
    DuplicateFamily { family: ParticleFamily },
}

impl From<TableError> for DoseError {
    fn from(error: TableError) -> Self {
        DoseError::data("DATA.MALFORMED_TABLE", error.to_string())
    }
}

/// A validated, immutable per-family tabulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientTable {
    family: ParticleFamily,
    energies: &'static [f64],
    ap: Option<&'static [f64]>,
    pa: Option<&'static [f64]>,
    iso: Option<&'static [f64]>,
    resolved: [ResolvedColumn; 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ResolvedColumn {
    geometry: Geometry,
    coefficients: &'static [f64],
}

impl CoefficientTable {
    pub fn from_dataset(source: &DatasetTable) -> Result<Self, TableError> {
        let family = source.family;
        validate_energies(family, source.energies)?;

        for geometry in Geometry::ALL {
            if let Some(column) = source.column(geometry) {
                validate_column(family, geometry, source.energies.len(), column)?;
            }
        }

        let resolve = |requested: Geometry| {
            fallback_order(requested)
                .into_iter()
                .find_map(|candidate| {
                    source.column(candidate).map(|coefficients| ResolvedColumn {
                        geometry: candidate,
                        coefficients,
                    })
                })
                .ok_or(TableError::NoColumns { family })
        };

        Ok(Self {
            family,
            energies: source.energies,
            ap: source.ap,
            pa: source.pa,
            iso: source.iso,
            resolved: [
                resolve(Geometry::Ap)?,
                resolve(Geometry::Pa)?,
                resolve(Geometry::Iso)?,
            ],
        })
    }

    pub fn family(&self) -> ParticleFamily {
        self.family
    }

    pub fn energies(&self) -> &'static [f64] {
        self.energies
    }

    pub fn min_energy(&self) -> f64 {
        self.energies[0]
    }

    pub fn max_energy(&self) -> f64 {
        self.energies[self.energies.len() - 1]
    }

    /// The column tabulated for exactly this geometry, without fallback.
    pub fn column(&self, geometry: Geometry) -> Option<&'static [f64]> {
        match geometry {
            Geometry::Ap => self.ap,
            Geometry::Pa => self.pa,
            Geometry::Iso => self.iso,
        }
    }

    /// Resolve the column used for `geometry`: the requested one when
    /// tabulated, otherwise the first available in [`fallback_order`].
    pub fn resolve_column(&self, geometry: Geometry) -> (Geometry, &'static [f64]) {
        let index = match geometry {
            Geometry::Ap => 0,
            Geometry::Pa => 1,
            Geometry::Iso => 2,
        };
        let resolved = self.resolved[index];
        (resolved.geometry, resolved.coefficients)
    }

    pub fn interpolate(&self, geometry: Geometry, energy_mev: f64) -> (Geometry, LogLogSample) {
        let (resolved, column) = self.resolve_column(geometry);
        (resolved, interpolate_log_log(self.energies, column, energy_mev))
    }
}

/// ISO is the shared fallback; AP and PA substitute for each other last.
pub const fn fallback_order(geometry: Geometry) -> [Geometry; 3] {
    match geometry {
        Geometry::Ap => [Geometry::Ap, Geometry::Iso, Geometry::Pa],
        Geometry::Pa => [Geometry::Pa, Geometry::Iso, Geometry::Ap],
        Geometry::Iso => [Geometry::Iso, Geometry::Ap, Geometry::Pa],
    }
}

fn validate_energies(family: ParticleFamily, energies: &[f64]) -> Result<(), TableError> {
    if energies.len() < 2 {
        return Err(TableError::InsufficientPoints {
            family,
            actual: energies.len(),
        });
    }

    for (index, value) in energies.iter().copied().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(TableError::InvalidEnergy {
                family,
                index,
                value,
            });
        }
        if index > 0 && value <= energies[index - 1] {
            return Err(TableError::NonIncreasingEnergy {
                family,
                index,
                previous: energies[index - 1],
                current: value,
            });
        }
    }
    Ok(())
}

fn validate_column(
    family: ParticleFamily,
    geometry: Geometry,
    energy_count: usize,
    column: &[f64],
) -> Result<(), TableError> {
    if column.len() != energy_count {
        return Err(TableError::LengthMismatch {
            family,
            geometry,
            energies: energy_count,
            coefficients: column.len(),
        });
    }

    for (index, value) in column.iter().copied().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(TableError::InvalidCoefficient {
                family,
                geometry,
                index,
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CoefficientTable, TableError, fallback_order};
    use crate::conversion::particle::ParticleFamily;
    use crate::data::{DatasetTable, ICRP_116};
    use crate::domain::{DoseError, DoseErrorCategory, Geometry};

    static ISO_ONLY: DatasetTable = DatasetTable {
        family: ParticleFamily::Proton,
        energies: &[1.0, 10.0, 100.0],
        ap: None,
        pa: None,
        iso: Some(&[2.0, 20.0, 200.0]),
    };

    static PA_ONLY: DatasetTable = DatasetTable {
        family: ParticleFamily::Neutron,
        energies: &[1.0, 10.0],
        ap: None,
        pa: Some(&[3.0, 30.0]),
        iso: None,
    };

    static AP_AND_PA: DatasetTable = DatasetTable {
        family: ParticleFamily::Photon,
        energies: &[1.0, 10.0],
        ap: Some(&[1.0, 2.0]),
        pa: Some(&[5.0, 6.0]),
        iso: None,
    };

    #[test]
    fn every_icrp116_table_validates() {
        for source in ICRP_116.tables {
            let table = CoefficientTable::from_dataset(source)
                .unwrap_or_else(|error| panic!("{} should validate: {}", source.family, error));
            assert_eq!(table.family(), source.family);
            assert!(table.min_energy() < table.max_energy());
        }
    }

    #[test]
    fn fallback_prefers_requested_then_iso() {
        assert_eq!(
            fallback_order(Geometry::Ap),
            [Geometry::Ap, Geometry::Iso, Geometry::Pa]
        );
        assert_eq!(
            fallback_order(Geometry::Pa),
            [Geometry::Pa, Geometry::Iso, Geometry::Ap]
        );
        assert_eq!(
            fallback_order(Geometry::Iso),
            [Geometry::Iso, Geometry::Ap, Geometry::Pa]
        );
    }

    #[test]
    fn missing_geometry_falls_back_to_iso_column() {
        let table = CoefficientTable::from_dataset(&ISO_ONLY).expect("table should validate");
        for geometry in Geometry::ALL {
            let (resolved, column) = table.resolve_column(geometry);
            assert_eq!(resolved, Geometry::Iso);
            assert_eq!(column, &[2.0, 20.0, 200.0]);
        }
    }

    #[test]
    fn single_non_iso_column_serves_every_geometry() {
        let table = CoefficientTable::from_dataset(&PA_ONLY).expect("table should validate");
        for geometry in Geometry::ALL {
            assert_eq!(table.resolve_column(geometry).0, Geometry::Pa);
        }
    }

    #[test]
    fn missing_iso_uses_ap_before_pa() {
        let table = CoefficientTable::from_dataset(&AP_AND_PA).expect("table should validate");
        assert_eq!(table.resolve_column(Geometry::Iso).0, Geometry::Ap);
        assert_eq!(table.resolve_column(Geometry::Pa).0, Geometry::Pa);
        assert_eq!(table.resolve_column(Geometry::Ap).0, Geometry::Ap);
    }

    #[test]
    fn malformed_tables_are_rejected() {
        static SHORT_COLUMN: DatasetTable = DatasetTable {
            family: ParticleFamily::Photon,
            energies: &[1.0, 2.0, 3.0],
            ap: Some(&[1.0, 2.0]),
            pa: None,
            iso: None,
        };
        static UNSORTED: DatasetTable = DatasetTable {
            family: ParticleFamily::Electron,
            energies: &[1.0, 3.0, 2.0],
            ap: None,
            pa: None,
            iso: Some(&[1.0, 2.0, 3.0]),
        };
        static EMPTY: DatasetTable = DatasetTable {
            family: ParticleFamily::Positron,
            energies: &[1.0, 2.0],
            ap: None,
            pa: None,
            iso: None,
        };
        static ZERO_COEFFICIENT: DatasetTable = DatasetTable {
            family: ParticleFamily::MuonPlus,
            energies: &[1.0, 2.0],
            ap: None,
            pa: None,
            iso: Some(&[0.0, 2.0]),
        };
        static SINGLE_POINT: DatasetTable = DatasetTable {
            family: ParticleFamily::MuonMinus,
            energies: &[1.0],
            ap: Some(&[1.0]),
            pa: None,
            iso: None,
        };

        assert!(matches!(
            CoefficientTable::from_dataset(&SHORT_COLUMN),
            Err(TableError::LengthMismatch {
                geometry: Geometry::Ap,
                energies: 3,
                coefficients: 2,
                ..
            })
        ));
        assert!(matches!(
            CoefficientTable::from_dataset(&UNSORTED),
            Err(TableError::NonIncreasingEnergy { index: 2, .. })
        ));
        assert!(matches!(
            CoefficientTable::from_dataset(&EMPTY),
            Err(TableError::NoColumns { .. })
        ));
        assert!(matches!(
            CoefficientTable::from_dataset(&ZERO_COEFFICIENT),
            Err(TableError::InvalidCoefficient { index: 0, .. })
        ));
        assert!(matches!(
            CoefficientTable::from_dataset(&SINGLE_POINT),
            Err(TableError::InsufficientPoints { actual: 1, .. })
        ));
    }

    #[test]
    fn table_errors_map_to_fatal_data_errors() {
        let error: DoseError = TableError::NoColumns {
            family: ParticleFamily::Photon,
        }
        .into();
        assert_eq!(error.category(), DoseErrorCategory::DataError);
        assert_eq!(error.placeholder(), "DATA.MALFORMED_TABLE");
        assert!(error.message().contains("photon"));
    }
}
