pub mod errors;

pub use errors::{DoseError, DoseErrorCategory, DoseResult};

use crate::common::constants::{MICROSIEVERT, MILLISIEVERT, NANOSIEVERT, PICOSIEVERT, SIEVERT};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Irradiation geometry selecting a coefficient column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// Antero-posterior.
    Ap,
    /// Postero-anterior.
    Pa,
    /// Isotropic.
    #[default]
    Iso,
}

impl Geometry {
    pub const ALL: [Geometry; 3] = [Self::Ap, Self::Pa, Self::Iso];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ap => "AP",
            Self::Pa => "PA",
            Self::Iso => "ISO",
        }
    }
}

impl Display for Geometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for Geometry {
    type Err = DoseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "AP" => Ok(Self::Ap),
            "PA" => Ok(Self::Pa),
            "ISO" => Ok(Self::Iso),
            other => Err(DoseError::input_validation(
                "INPUT.GEOMETRY",
                format!("unknown irradiation geometry '{}', expected AP, PA or ISO", other),
            )),
        }
    }
}

/// Unit in which published dose values are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseUnit {
    Sievert,
    Millisievert,
    Microsievert,
    Nanosievert,
    #[default]
    Picosievert,
}

impl DoseUnit {
    /// Size of one unit in sievert (J/kg).
    pub const fn in_sievert(self) -> f64 {
        match self {
            Self::Sievert => SIEVERT,
            Self::Millisievert => MILLISIEVERT,
            Self::Microsievert => MICROSIEVERT,
            Self::Nanosievert => NANOSIEVERT,
            Self::Picosievert => PICOSIEVERT,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sievert => "Sv",
            Self::Millisievert => "mSv",
            Self::Microsievert => "uSv",
            Self::Nanosievert => "nSv",
            Self::Picosievert => "pSv",
        }
    }

    /// Express a dose given in sievert in this unit.
    pub fn from_sievert(self, dose_sv: f64) -> f64 {
        dose_sv / self.in_sievert()
    }

    /// Convert a dose expressed in this unit back to sievert.
    pub fn to_sievert(self, dose: f64) -> f64 {
        dose * self.in_sievert()
    }
}

impl Display for DoseUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).symbol())
    }
}

impl FromStr for DoseUnit {
    type Err = DoseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sv" | "sievert" => Ok(Self::Sievert),
            "msv" | "millisievert" => Ok(Self::Millisievert),
            "usv" | "microsievert" => Ok(Self::Microsievert),
            "nsv" | "nanosievert" => Ok(Self::Nanosievert),
            "psv" | "picosievert" => Ok(Self::Picosievert),
            other => Err(DoseError::input_validation(
                "INPUT.DOSE_UNIT",
                format!("unknown dose unit '{}'", other),
            )),
        }
    }
}
