//! Detector-level scorer settings.
//!
//! Settings are fixed for the lifetime of a scorer instance; the coefficient
//! datasets and the particle dispatch are compiled in and not configurable.

use crate::domain::{DoseError, DoseUnit, Geometry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScorerConfig {
    pub geometry: Geometry,
    pub cell_volume_cm3: f64,
    pub dose_unit: DoseUnit,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::Iso,
            cell_volume_cm3: 1.0,
            dose_unit: DoseUnit::Picosievert,
        }
    }
}

impl ScorerConfig {
    pub fn new(geometry: Geometry, cell_volume_cm3: f64) -> Self {
        Self {
            geometry,
            cell_volume_cm3,
            ..Self::default()
        }
    }

    pub fn with_dose_unit(mut self, dose_unit: DoseUnit) -> Self {
        self.dose_unit = dose_unit;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let volume = self.cell_volume_cm3;
        // a subnormal volume turns every step fluence into inf
        if !volume.is_finite() || volume <= 0.0 || !(1.0 / volume).is_finite() {
            return Err(ConfigError::InvalidCellVolume {
                value: self.cell_volume_cm3,
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read scorer config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse scorer config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cell volume must be finite and > 0 cm^3 with a finite reciprocal, got {value}")]
    InvalidCellVolume { value: f64 },
}

impl ConfigError {
    pub fn as_dose_error(&self) -> DoseError {
        match self {
            Self::Read { .. } => DoseError::io_system("IO.CONFIG_READ", self.to_string()),
            Self::Parse { .. } => DoseError::input_validation("INPUT.CONFIG_PARSE", self.to_string()),
            Self::InvalidCellVolume { .. } => {
                DoseError::input_validation("INPUT.CELL_VOLUME", self.to_string())
            }
        }
    }
}

impl From<ConfigError> for DoseError {
    fn from(error: ConfigError) -> Self {
        error.as_dose_error()
    }
}

pub fn load_scorer_config(config_path: impl AsRef<Path>) -> Result<ScorerConfig, ConfigError> {
    let config_path = config_path.as_ref();
    let source = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    let config: ScorerConfig =
        serde_json::from_str(&source).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}
