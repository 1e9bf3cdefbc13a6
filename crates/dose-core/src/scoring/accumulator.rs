//! Sparse per-event dose map with an explicit event lifecycle.
//!
//! `Empty -> Accumulating` on begin, contributions only while accumulating,
//! `Accumulating -> Finalized` on end. The next begin clears and reopens.

use crate::domain::{DoseError, DoseResult};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccumulatorState {
    #[default]
    Empty,
    Accumulating,
    Finalized,
}

impl AccumulatorState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Accumulating => "accumulating",
            Self::Finalized => "finalized",
        }
    }
}

/// Contents handed over at event end, keyed by copy index, in sievert.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FinalizedEvent {
    pub event_id: u64,
    pub doses_sv: BTreeMap<i32, f64>,
}

#[derive(Debug, Clone, Default)]
pub struct PerEventAccumulator {
    state: AccumulatorState,
    event_id: Option<u64>,
    doses_sv: BTreeMap<i32, f64>,
}

impl PerEventAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AccumulatorState {
        self.state
    }

    pub fn event_id(&self) -> Option<u64> {
        self.event_id
    }

    pub fn is_accumulating(&self) -> bool {
        self.state == AccumulatorState::Accumulating
    }

    /// Entry for `copy_index` in the open event, in sievert.
    pub fn get(&self, copy_index: i32) -> Option<f64> {
        self.doses_sv.get(&copy_index).copied()
    }

    pub fn len(&self) -> usize {
        self.doses_sv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doses_sv.is_empty()
    }

    pub fn begin_event(&mut self, event_id: u64) -> DoseResult<()> {
        if self.state == AccumulatorState::Accumulating {
            return Err(out_of_order(format!(
                "begin of event {} while event {} is still accumulating",
                event_id,
                self.event_id.unwrap_or_default()
            )));
        }

        self.doses_sv.clear();
        self.event_id = Some(event_id);
        self.state = AccumulatorState::Accumulating;
        Ok(())
    }

    pub fn add_contribution(&mut self, copy_index: i32, dose_sv: f64) -> DoseResult<()> {
        if self.state != AccumulatorState::Accumulating {
            return Err(out_of_order(format!(
                "contribution to copy {} while accumulator is {}",
                copy_index,
                self.state.as_str()
            )));
        }
        if !dose_sv.is_finite() || dose_sv < 0.0 {
            return Err(DoseError::input_validation(
                "INPUT.DOSE",
                format!(
                    "dose contribution must be finite and >= 0 Sv, got {} for copy {}",
                    dose_sv, copy_index
                ),
            ));
        }

        self.doses_sv
            .entry(copy_index)
            .and_modify(|total| *total += dose_sv)
            .or_insert(dose_sv);
        Ok(())
    }

    pub fn end_event(&mut self) -> DoseResult<FinalizedEvent> {
        if self.state != AccumulatorState::Accumulating {
            return Err(out_of_order(format!(
                "end of event while accumulator is {}",
                self.state.as_str()
            )));
        }

        self.state = AccumulatorState::Finalized;
        Ok(FinalizedEvent {
            event_id: self.event_id.unwrap_or_default(),
            doses_sv: std::mem::take(&mut self.doses_sv),
        })
    }
}

fn out_of_order(message: String) -> DoseError {
    tracing::warn!(%message, "event boundary contract violated");
    DoseError::contract("EVENT.OUT_OF_ORDER", message)
}

#[cfg(test)]
mod tests {
    use super::{AccumulatorState, PerEventAccumulator};
    use crate::domain::DoseErrorCategory;

    #[test]
    fn lifecycle_moves_through_all_states() {
        let mut accumulator = PerEventAccumulator::new();
        assert_eq!(accumulator.state(), AccumulatorState::Empty);

        accumulator.begin_event(7).expect("begin should succeed");
        assert_eq!(accumulator.state(), AccumulatorState::Accumulating);
        assert_eq!(accumulator.event_id(), Some(7));

        accumulator
            .add_contribution(3, 1.5)
            .expect("contribution should be accepted");
        let finalized = accumulator.end_event().expect("end should succeed");
        assert_eq!(accumulator.state(), AccumulatorState::Finalized);
        assert_eq!(finalized.event_id, 7);
        assert_eq!(finalized.doses_sv.get(&3), Some(&1.5));

        accumulator.begin_event(8).expect("next begin should succeed");
        assert!(accumulator.is_empty());
    }

    #[test]
    fn untouched_copies_have_no_entry() {
        let mut accumulator = PerEventAccumulator::new();
        accumulator.begin_event(1).expect("begin should succeed");
        accumulator
            .add_contribution(2, 0.25)
            .expect("contribution should be accepted");
        accumulator
            .add_contribution(5, 0.5)
            .expect("contribution should be accepted");

        let finalized = accumulator.end_event().expect("end should succeed");
        assert_eq!(finalized.doses_sv.keys().copied().collect::<Vec<_>>(), vec![2, 5]);
        assert!(!finalized.doses_sv.contains_key(&0));
    }

    #[test]
    fn contributions_sum_in_any_order() {
        let contributions = [0.125, 2.5, 0.375];
        let orders = [[0, 1, 2], [2, 1, 0], [1, 0, 2], [2, 0, 1]];
        let mut totals = Vec::new();

        for order in orders {
            let mut accumulator = PerEventAccumulator::new();
            accumulator.begin_event(1).expect("begin should succeed");
            for index in order {
                accumulator
                    .add_contribution(4, contributions[index])
                    .expect("contribution should be accepted");
            }
            totals.push(accumulator.get(4).expect("copy 4 should have an entry"));
        }

        assert!(totals.iter().all(|total| *total == 3.0));
    }

    #[test]
    fn double_begin_is_a_contract_violation() {
        let mut accumulator = PerEventAccumulator::new();
        accumulator.begin_event(1).expect("begin should succeed");
        let error = accumulator
            .begin_event(2)
            .expect_err("second begin should fail");
        assert_eq!(error.category(), DoseErrorCategory::ContractViolation);
        assert_eq!(error.placeholder(), "EVENT.OUT_OF_ORDER");
        assert_eq!(accumulator.event_id(), Some(1));
    }

    #[test]
    fn contribution_outside_an_event_is_rejected() {
        let mut accumulator = PerEventAccumulator::new();
        let error = accumulator
            .add_contribution(1, 1.0)
            .expect_err("contribution before begin should fail");
        assert_eq!(error.category(), DoseErrorCategory::ContractViolation);

        accumulator.begin_event(1).expect("begin should succeed");
        accumulator.end_event().expect("end should succeed");
        let error = accumulator
            .add_contribution(1, 1.0)
            .expect_err("contribution after end should fail");
        assert!(error.message().contains("finalized"));
    }

    #[test]
    fn end_without_begin_is_rejected() {
        let mut accumulator = PerEventAccumulator::new();
        assert!(accumulator.end_event().is_err());

        accumulator.begin_event(1).expect("begin should succeed");
        accumulator.end_event().expect("end should succeed");
        assert!(accumulator.end_event().is_err());
    }

    #[test]
    fn invalid_doses_are_rejected_without_touching_the_map() {
        let mut accumulator = PerEventAccumulator::new();
        accumulator.begin_event(1).expect("begin should succeed");
        for dose in [-1.0, f64::NAN, f64::INFINITY] {
            let error = accumulator
                .add_contribution(0, dose)
                .expect_err("invalid dose should fail");
            assert_eq!(error.category(), DoseErrorCategory::InputValidationError);
        }
        assert!(accumulator.is_empty());
    }
}
