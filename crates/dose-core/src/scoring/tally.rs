//! Run-level merge of finalized event dose maps.
//!
//! Each event counts as one history; copies not hit in an event score zero
//! for that history.

use super::scorer::EventDoses;
use crate::domain::{DoseError, DoseResult, DoseUnit};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct CellTally {
    sum: f64,
    sum_sq: f64,
    hit_events: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSummary {
    pub copy_index: i32,
    pub total: f64,
    pub mean_per_event: f64,
    /// Relative standard error of the mean; 1.0 when undefined.
    pub relative_error: f64,
    pub hit_events: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunTally {
    unit: Option<DoseUnit>,
    events: u64,
    cells: BTreeMap<i32, CellTally>,
}

impl RunTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> u64 {
        self.events
    }

    pub fn unit(&self) -> Option<DoseUnit> {
        self.unit
    }

    pub fn record(&mut self, event: &EventDoses) -> DoseResult<()> {
        self.check_unit(event.unit)?;
        self.events += 1;
        for (copy_index, dose) in &event.doses {
            let cell = self.cells.entry(*copy_index).or_default();
            cell.sum += dose;
            cell.sum_sq += dose * dose;
            cell.hit_events += 1;
        }
        Ok(())
    }

    /// Fold another worker's tally into this one.
    pub fn merge(&mut self, other: RunTally) -> DoseResult<()> {
        if let Some(unit) = other.unit {
            self.check_unit(unit)?;
        }
        self.events += other.events;
        for (copy_index, incoming) in other.cells {
            let cell = self.cells.entry(copy_index).or_default();
            cell.sum += incoming.sum;
            cell.sum_sq += incoming.sum_sq;
            cell.hit_events += incoming.hit_events;
        }
        Ok(())
    }

    pub fn summary(&self, copy_index: i32) -> Option<CellSummary> {
        let cell = self.cells.get(&copy_index)?;
        let n = self.events.max(1) as f64;
        let mean = cell.sum / n;
        let mean_sq = cell.sum_sq / n;
        let variance = ((mean_sq - mean * mean) / n).max(0.0);
        let relative_error = if mean > 0.0 {
            variance.sqrt() / mean
        } else {
            1.0
        };

        Some(CellSummary {
            copy_index,
            total: cell.sum,
            mean_per_event: mean,
            relative_error,
            hit_events: cell.hit_events,
        })
    }

    pub fn summaries(&self) -> Vec<CellSummary> {
        self.cells
            .keys()
            .filter_map(|copy_index| self.summary(*copy_index))
            .collect()
    }

    fn check_unit(&mut self, unit: DoseUnit) -> DoseResult<()> {
        match self.unit {
            None => {
                self.unit = Some(unit);
                Ok(())
            }
            Some(existing) if existing == unit => Ok(()),
            Some(existing) => Err(DoseError::input_validation(
                "INPUT.TALLY_UNIT",
                format!("cannot merge {} event doses into a {} tally", unit, existing),
            )),
        }
    }
}
