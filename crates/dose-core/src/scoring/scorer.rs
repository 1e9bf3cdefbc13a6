use super::accumulator::{AccumulatorState, PerEventAccumulator};
use crate::common::config::ScorerConfig;
use crate::conversion::DoseConversionEngine;
use crate::domain::{DoseError, DoseResult, DoseUnit, Geometry};
use std::collections::BTreeMap;

/// One transport step as reported by the host simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// Replica/copy number of the traversed detector volume.
    pub copy_index: i32,
    /// PDG code of the stepping particle.
    pub particle_code: i32,
    /// Pre-step kinetic energy.
    pub kinetic_energy_mev: f64,
    pub step_length_cm: f64,
    pub energy_deposit_mev: f64,
    pub weight: f64,
}

impl StepRecord {
    pub fn new(
        copy_index: i32,
        particle_code: i32,
        kinetic_energy_mev: f64,
        step_length_cm: f64,
    ) -> Self {
        Self {
            copy_index,
            particle_code,
            kinetic_energy_mev,
            step_length_cm,
            energy_deposit_mev: 0.0,
            weight: 1.0,
        }
    }

    pub fn with_energy_deposit(mut self, energy_deposit_mev: f64) -> Self {
        self.energy_deposit_mev = energy_deposit_mev;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Track-length fluence estimate in cm^-2 for a cell of the given volume.
    pub fn fluence_per_cm2(&self, cell_volume_cm3: f64) -> f64 {
        self.weight * self.step_length_cm / cell_volume_cm3
    }

    fn validate(&self) -> DoseResult<()> {
        let fields = [
            ("step length", self.step_length_cm),
            ("energy deposit", self.energy_deposit_mev),
            ("weight", self.weight),
        ];
        for (label, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DoseError::input_validation(
                    "INPUT.STEP",
                    format!(
                        "step {} must be finite and >= 0, got {} in copy {}",
                        label, value, self.copy_index
                    ),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventBoundary {
    Begin { event_id: u64 },
    End,
}

/// Finalized per-event dose map, expressed in `unit`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDoses {
    pub event_id: u64,
    pub unit: DoseUnit,
    pub doses: BTreeMap<i32, f64>,
}

impl EventDoses {
    pub fn get(&self, copy_index: i32) -> Option<f64> {
        self.doses.get(&copy_index).copied()
    }

    pub fn total(&self) -> f64 {
        self.doses.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.doses.is_empty()
    }
}

/// Effective dose scorer attached to one detector, owned by one worker.
#[derive(Debug, Clone)]
pub struct EffectiveDoseScorer<'e> {
    name: String,
    engine: &'e DoseConversionEngine,
    config: ScorerConfig,
    accumulator: PerEventAccumulator,
}

impl<'e> EffectiveDoseScorer<'e> {
    pub fn new(
        name: impl Into<String>,
        engine: &'e DoseConversionEngine,
        config: ScorerConfig,
    ) -> DoseResult<Self> {
        config.validate()?;
        let name = name.into();
        tracing::debug!(
            scorer = %name,
            geometry = %config.geometry,
            cell_volume_cm3 = config.cell_volume_cm3,
            unit = %config.dose_unit,
            "effective dose scorer created"
        );
        Ok(Self {
            name,
            engine,
            config,
            accumulator: PerEventAccumulator::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> Geometry {
        self.config.geometry
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn state(&self) -> AccumulatorState {
        self.accumulator.state()
    }

    /// Running dose for `copy_index` in the open event, in the configured unit.
    pub fn current_dose(&self, copy_index: i32) -> Option<f64> {
        self.accumulator
            .get(copy_index)
            .map(|dose_sv| self.config.dose_unit.from_sievert(dose_sv))
    }

    /// Score one step. Returns the dose added in sievert, or `None` when the
    /// particle has no coefficient table or the step carries no fluence.
    pub fn on_step(&mut self, step: &StepRecord) -> DoseResult<Option<f64>> {
        if !self.accumulator.is_accumulating() {
            return Err(DoseError::contract(
                "EVENT.OUT_OF_ORDER",
                format!(
                    "{}: step in copy {} outside an open event (accumulator is {})",
                    self.name,
                    step.copy_index,
                    self.accumulator.state().as_str()
                ),
            ));
        }
        step.validate()?;

        let Some(coefficient) = self.engine.lookup_coefficient(
            step.particle_code,
            step.kinetic_energy_mev,
            self.config.geometry,
        )?
        else {
            return Ok(None);
        };

        let fluence = step.fluence_per_cm2(self.config.cell_volume_cm3);
        if fluence == 0.0 {
            return Ok(None);
        }

        let dose_sv = coefficient.dose_sv(fluence);
        self.accumulator.add_contribution(step.copy_index, dose_sv)?;
        Ok(Some(dose_sv))
    }

    pub fn begin_event(&mut self, event_id: u64) -> DoseResult<()> {
        self.accumulator.begin_event(event_id)
    }

    pub fn end_event(&mut self) -> DoseResult<EventDoses> {
        let finalized = self.accumulator.end_event()?;
        let unit = self.config.dose_unit;
        let doses = finalized
            .doses_sv
            .into_iter()
            .map(|(copy_index, dose_sv)| (copy_index, unit.from_sievert(dose_sv)))
            .collect::<BTreeMap<_, _>>();

        tracing::debug!(
            scorer = %self.name,
            event_id = finalized.event_id,
            copies = doses.len(),
            "event dose map finalized"
        );

        Ok(EventDoses {
            event_id: finalized.event_id,
            unit,
            doses,
        })
    }

    /// Drive the event lifecycle; `End` yields the finalized map.
    pub fn on_event_boundary(&mut self, boundary: EventBoundary) -> DoseResult<Option<EventDoses>> {
        match boundary {
            EventBoundary::Begin { event_id } => {
                self.begin_event(event_id)?;
                Ok(None)
            }
            EventBoundary::End => self.end_event().map(Some),
        }
    }
}
