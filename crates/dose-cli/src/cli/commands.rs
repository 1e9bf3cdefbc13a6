use super::CliError;
use anyhow::Context;
use dose_core::conversion::GridPosition;
use dose_core::{
    Coefficient, DoseConversionEngine, DoseError, DoseUnit, Geometry, ParticleFamily, ScorerConfig,
    load_scorer_config,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct CoefficientArgs {
    /// Particle name (gamma, e-, neutron, ...), family label or PDG code
    #[arg(long, allow_hyphen_values = true)]
    particle: String,

    /// Kinetic energy in MeV
    #[arg(long, allow_hyphen_values = true)]
    energy: f64,

    /// Irradiation geometry (AP, PA or ISO)
    #[arg(long)]
    geometry: Option<Geometry>,

    /// Fluence in cm^-2; also prints the resulting dose
    #[arg(long, allow_hyphen_values = true)]
    fluence: Option<f64>,

    /// Unit for the printed dose (Sv, mSv, uSv, nSv, pSv)
    #[arg(long)]
    unit: Option<DoseUnit>,

    /// Scorer config supplying the default geometry and dose unit
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct TableArgs {
    /// Particle name, family label or PDG code
    #[arg(long, allow_hyphen_values = true)]
    particle: String,
}

pub(super) fn run_coefficient_command(args: CoefficientArgs) -> Result<i32, CliError> {
    let config = match &args.config {
        Some(path) => load_scorer_config(path).map_err(DoseError::from)?,
        None => ScorerConfig::default(),
    };
    let geometry = args.geometry.unwrap_or(config.geometry);
    let unit = args.unit.unwrap_or(config.dose_unit);

    if let Some(fluence) = args.fluence.filter(|value| !value.is_finite() || *value < 0.0) {
        return Err(DoseError::input_validation(
            "INPUT.FLUENCE",
            format!("fluence must be finite and >= 0 cm^-2, got {}", fluence),
        )
        .into());
    }

    let engine = DoseConversionEngine::shared()?;
    let family = match resolve_particle(&args.particle)? {
        ParticleLookup::Family(family) => family,
        ParticleLookup::NotApplicable(code) => {
            println!("not applicable: no coefficient table for PDG code {}", code);
            return Ok(0);
        }
    };

    let Some(coefficient) = engine.lookup_family(family, args.energy, geometry)? else {
        println!(
            "not applicable: {} is not tabulated in {} {}",
            family,
            engine.dataset_id(),
            engine.dataset_version()
        );
        return Ok(0);
    };

    tracing::debug!(
        %family,
        requested = %geometry,
        column = %coefficient.geometry,
        energy_mev = args.energy,
        value = coefficient.value,
        "coefficient resolved"
    );
    if coefficient.geometry != geometry {
        tracing::debug!(
            %family,
            requested = %geometry,
            column = %coefficient.geometry,
            "geometry column fell back"
        );
    }
    if coefficient.position.is_clamped() {
        tracing::debug!(%family, energy_mev = args.energy, "energy clamped to tabulated range");
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render_coefficient(&coefficient, args.energy))
        .context("failed to write coefficient")?;
    if let Some(fluence) = args.fluence {
        let dose = unit.from_sievert(coefficient.dose_sv(fluence));
        writeln!(stdout, "dose: {} {}", dose, unit).context("failed to write dose")?;
    }
    Ok(0)
}

pub(super) fn run_table_command(args: TableArgs) -> Result<i32, CliError> {
    let engine = DoseConversionEngine::shared()?;
    let family = match resolve_particle(&args.particle)? {
        ParticleLookup::Family(family) => family,
        ParticleLookup::NotApplicable(code) => {
            return Err(DoseError::input_validation(
                "INPUT.PARTICLE",
                format!("no coefficient table for PDG code {}", code),
            )
            .into());
        }
    };
    let Some(table) = engine.table(family) else {
        return Err(DoseError::input_validation(
            "INPUT.PARTICLE",
            format!("{} is not tabulated in {}", family, engine.dataset_id()),
        )
        .into());
    };
    tracing::debug!(%family, points = table.energies().len(), "printing coefficient table");

    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "# {} ({} {}) pSv cm^2",
        family,
        engine.dataset_id(),
        engine.dataset_version()
    )
    .context("failed to write table header")?;
    writeln!(
        stdout,
        "{:>12} {:>12} {:>12} {:>12}",
        "energy_mev", "AP", "PA", "ISO"
    )
    .context("failed to write table header")?;

    for (index, energy) in table.energies().iter().enumerate() {
        let mut line = format!("{:>12}", energy);
        for geometry in Geometry::ALL {
            match table.column(geometry) {
                Some(column) => line.push_str(&format!(" {:>12}", column[index])),
                None => line.push_str(&format!(" {:>12}", "-")),
            }
        }
        writeln!(stdout, "{}", line).context("failed to write table row")?;
    }
    Ok(0)
}

pub(super) fn run_families_command() -> Result<i32, CliError> {
    let engine = DoseConversionEngine::shared()?;
    let mut stdout = std::io::stdout().lock();

    for family in engine.families() {
        let Some(table) = engine.table(family) else {
            continue;
        };
        writeln!(
            stdout,
            "{:<12} {:<6} {:>11} {:>3} points {}-{} MeV",
            family.as_str(),
            family.particle_name(),
            family.pdg_code(),
            table.energies().len(),
            table.min_energy(),
            table.max_energy()
        )
        .context("failed to write family listing")?;
    }
    Ok(0)
}

enum ParticleLookup {
    Family(ParticleFamily),
    NotApplicable(i32),
}

fn resolve_particle(identifier: &str) -> Result<ParticleLookup, CliError> {
    if let Some(family) = ParticleFamily::from_identifier(identifier) {
        return Ok(ParticleLookup::Family(family));
    }
    if let Ok(code) = identifier.trim().parse::<i32>() {
        return Ok(ParticleLookup::NotApplicable(code));
    }
    Err(DoseError::input_validation(
        "INPUT.PARTICLE",
        format!("unknown particle '{}'", identifier),
    )
    .into())
}

fn render_coefficient(coefficient: &Coefficient, energy_mev: f64) -> String {
    let mut line = format!(
        "{} {} {} MeV: {} pSv cm^2",
        coefficient.family, coefficient.requested_geometry, energy_mev, coefficient.value
    );
    if coefficient.geometry != coefficient.requested_geometry {
        line.push_str(&format!(" (read from {} column)", coefficient.geometry));
    }
    match coefficient.position {
        GridPosition::BelowRange => line.push_str(" (clamped to lowest tabulated energy)"),
        GridPosition::AboveRange => line.push_str(" (clamped to highest tabulated energy)"),
        GridPosition::Exact(_) | GridPosition::Between { .. } => {}
    }
    line
}
