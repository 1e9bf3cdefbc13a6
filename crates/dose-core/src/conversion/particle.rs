//! Particle identity to coefficient-family dispatch.
//!
//! Identifiers follow the standard PDG Monte Carlo numbering scheme; ions use
//! the `10LZZZAAAI` form. Anything outside the closed set below has no table.

use std::fmt::{Display, Formatter};

pub const PDG_PHOTON: i32 = 22;
pub const PDG_ELECTRON: i32 = 11;
pub const PDG_POSITRON: i32 = -11;
pub const PDG_NEUTRON: i32 = 2112;
pub const PDG_PION_MINUS: i32 = -211;
pub const PDG_PION_PLUS: i32 = 211;
pub const PDG_MUON_MINUS: i32 = 13;
pub const PDG_MUON_PLUS: i32 = -13;
pub const PDG_ALPHA: i32 = 1_000_020_040;
pub const PDG_PROTON: i32 = 2212;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParticleFamily {
    Photon,
    Electron,
    Positron,
    Neutron,
    PionMinus,
    PionPlus,
    MuonMinus,
    MuonPlus,
    Helium,
    Proton,
}

impl ParticleFamily {
    pub const ALL: [ParticleFamily; 10] = [
        Self::Photon,
        Self::Electron,
        Self::Positron,
        Self::Neutron,
        Self::PionMinus,
        Self::PionPlus,
        Self::MuonMinus,
        Self::MuonPlus,
        Self::Helium,
        Self::Proton,
    ];

    /// Resolve a PDG code; `None` means no dose attribution for this particle.
    pub const fn from_pdg(code: i32) -> Option<Self> {
        match code {
            PDG_PHOTON => Some(Self::Photon),
            PDG_ELECTRON => Some(Self::Electron),
            PDG_POSITRON => Some(Self::Positron),
            PDG_NEUTRON => Some(Self::Neutron),
            PDG_PION_MINUS => Some(Self::PionMinus),
            PDG_PION_PLUS => Some(Self::PionPlus),
            PDG_MUON_MINUS => Some(Self::MuonMinus),
            PDG_MUON_PLUS => Some(Self::MuonPlus),
            PDG_ALPHA => Some(Self::Helium),
            PDG_PROTON => Some(Self::Proton),
            _ => None,
        }
    }

    pub const fn pdg_code(self) -> i32 {
        match self {
            Self::Photon => PDG_PHOTON,
            Self::Electron => PDG_ELECTRON,
            Self::Positron => PDG_POSITRON,
            Self::Neutron => PDG_NEUTRON,
            Self::PionMinus => PDG_PION_MINUS,
            Self::PionPlus => PDG_PION_PLUS,
            Self::MuonMinus => PDG_MUON_MINUS,
            Self::MuonPlus => PDG_MUON_PLUS,
            Self::Helium => PDG_ALPHA,
            Self::Proton => PDG_PROTON,
        }
    }

    /// Transport-toolkit particle name.
    pub const fn particle_name(self) -> &'static str {
        match self {
            Self::Photon => "gamma",
            Self::Electron => "e-",
            Self::Positron => "e+",
            Self::Neutron => "neutron",
            Self::PionMinus => "pi-",
            Self::PionPlus => "pi+",
            Self::MuonMinus => "mu-",
            Self::MuonPlus => "mu+",
            Self::Helium => "alpha",
            Self::Proton => "proton",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photon => "photon",
            Self::Electron => "electron",
            Self::Positron => "positron",
            Self::Neutron => "neutron",
            Self::PionMinus => "pion-minus",
            Self::PionPlus => "pion-plus",
            Self::MuonMinus => "muon-minus",
            Self::MuonPlus => "muon-plus",
            Self::Helium => "helium",
            Self::Proton => "proton",
        }
    }

    /// Accepts a family label, a particle name or a PDG code.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let normalized = identifier.trim();
        if let Ok(code) = normalized.parse::<i32>() {
            return Self::from_pdg(code);
        }

        let lowered = normalized.to_ascii_lowercase();
        Self::ALL.into_iter().find(|family| {
            family.as_str() == lowered
                || family.particle_name() == lowered
                || (lowered == "he4" && *family == Self::Helium)
        })
    }
}

impl Display for ParticleFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{PDG_ALPHA, ParticleFamily};

    #[test]
    fn pdg_dispatch_round_trips_for_every_family() {
        for family in ParticleFamily::ALL {
            assert_eq!(ParticleFamily::from_pdg(family.pdg_code()), Some(family));
        }
    }

    #[test]
    fn unsupported_codes_have_no_family() {
        // kaon+, deuteron, neutrino, anti-proton, unknown
        for code in [321, 1_000_010_020, 12, -2212, 0, 999_999] {
            assert_eq!(ParticleFamily::from_pdg(code), None, "code {}", code);
        }
    }

    #[test]
    fn charge_conjugates_resolve_to_distinct_families() {
        assert_eq!(ParticleFamily::from_pdg(11), Some(ParticleFamily::Electron));
        assert_eq!(ParticleFamily::from_pdg(-11), Some(ParticleFamily::Positron));
        assert_eq!(ParticleFamily::from_pdg(13), Some(ParticleFamily::MuonMinus));
        assert_eq!(ParticleFamily::from_pdg(-13), Some(ParticleFamily::MuonPlus));
        assert_eq!(ParticleFamily::from_pdg(211), Some(ParticleFamily::PionPlus));
        assert_eq!(ParticleFamily::from_pdg(-211), Some(ParticleFamily::PionMinus));
        assert_eq!(ParticleFamily::from_pdg(PDG_ALPHA), Some(ParticleFamily::Helium));
    }

    #[test]
    fn identifiers_accept_names_labels_and_codes() {
        assert_eq!(
            ParticleFamily::from_identifier("gamma"),
            Some(ParticleFamily::Photon)
        );
        assert_eq!(
            ParticleFamily::from_identifier("Photon"),
            Some(ParticleFamily::Photon)
        );
        assert_eq!(
            ParticleFamily::from_identifier(" 2112 "),
            Some(ParticleFamily::Neutron)
        );
        assert_eq!(
            ParticleFamily::from_identifier("e+"),
            Some(ParticleFamily::Positron)
        );
        assert_eq!(
            ParticleFamily::from_identifier("He4"),
            Some(ParticleFamily::Helium)
        );
        assert_eq!(ParticleFamily::from_identifier("kaon+"), None);
        assert_eq!(ParticleFamily::from_identifier("321"), None);
    }
}
