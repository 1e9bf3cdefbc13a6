//! Log-log interpolation over a validated energy grid.
//!
//! Queries outside the grid are clamped to the first/last tabulated
//! coefficient (flat extrapolation). Exact grid hits return the tabulated
//! value untouched.

/// Where a query energy landed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPosition {
    BelowRange,
    Exact(usize),
    Between { lower: usize },
    AboveRange,
}

impl GridPosition {
    pub const fn is_clamped(self) -> bool {
        matches!(self, Self::BelowRange | Self::AboveRange)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLogSample {
    pub value: f64,
    pub position: GridPosition,
}

/// Caller guarantees a strictly increasing positive grid of at least two
/// points, positive coefficients of equal length, and a finite query.
pub fn interpolate_log_log(energies: &[f64], coefficients: &[f64], energy: f64) -> LogLogSample {
    debug_assert!(energies.len() >= 2);
    debug_assert_eq!(energies.len(), coefficients.len());

    let position = locate(energies, energy);
    let value = match position {
        GridPosition::BelowRange => coefficients[0],
        GridPosition::AboveRange => coefficients[coefficients.len() - 1],
        GridPosition::Exact(index) => coefficients[index],
        GridPosition::Between { lower } => log_log_segment(
            energy,
            energies[lower],
            energies[lower + 1],
            coefficients[lower],
            coefficients[lower + 1],
        ),
    };

    LogLogSample { value, position }
}

pub fn locate(energies: &[f64], energy: f64) -> GridPosition {
    let last = energies.len() - 1;
    if energy < energies[0] {
        return GridPosition::BelowRange;
    }
    if energy > energies[last] {
        return GridPosition::AboveRange;
    }

    match energies.binary_search_by(|probe| probe.total_cmp(&energy)) {
        Ok(index) => GridPosition::Exact(index),
        Err(upper) => GridPosition::Between { lower: upper - 1 },
    }
}

/// `ln c = ln c0 + (ln e - ln e0) / (ln e1 - ln e0) * (ln c1 - ln c0)`
fn log_log_segment(energy: f64, e0: f64, e1: f64, c0: f64, c1: f64) -> f64 {
    let fraction = (energy.ln() - e0.ln()) / (e1.ln() - e0.ln());
    let log_value = c0.ln() + fraction * (c1.ln() - c0.ln());
    // rounding in exp() must not leave the bracket
    log_value.exp().clamp(c0.min(c1), c0.max(c1))
}
