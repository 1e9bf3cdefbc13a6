use dose_core::conversion::particle::{PDG_ELECTRON, PDG_NEUTRON, PDG_PHOTON, PDG_PROTON};
use dose_core::{
    DoseConversionEngine, DoseErrorCategory, DoseUnit, EffectiveDoseScorer, EventBoundary,
    Geometry, RunTally, ScorerConfig, StepRecord,
};
use std::collections::BTreeMap;

// Two Co-60 lines plus a few secondaries and an unsupported kaon step.
fn event_steps(event_id: u64) -> Vec<StepRecord> {
    let copy = (event_id % 3) as i32;
    vec![
        StepRecord::new(copy, PDG_PHOTON, 1.3325, 2.0).with_energy_deposit(0.01),
        StepRecord::new(copy, PDG_PHOTON, 1.1732, 1.5),
        StepRecord::new(copy + 10, PDG_ELECTRON, 0.4, 0.05).with_energy_deposit(0.4),
        StepRecord::new(copy + 10, PDG_NEUTRON, 2.0, 3.0).with_weight(0.25),
        StepRecord::new(copy + 20, 321, 50.0, 1.0),
        StepRecord::new(copy, PDG_PROTON, 150.0, 0.0),
    ]
}

fn expected_doses(
    engine: &DoseConversionEngine,
    config: &ScorerConfig,
    steps: &[StepRecord],
) -> BTreeMap<i32, f64> {
    let mut expected = BTreeMap::new();
    for step in steps {
        let Some(coefficient) = engine
            .lookup_coefficient(step.particle_code, step.kinetic_energy_mev, config.geometry)
            .expect("lookup should succeed")
        else {
            continue;
        };
        let fluence = step.fluence_per_cm2(config.cell_volume_cm3);
        if fluence == 0.0 {
            continue;
        }
        let dose = config
            .dose_unit
            .from_sievert(DoseConversionEngine::contribution(coefficient.value, fluence));
        *expected.entry(step.copy_index).or_insert(0.0) += dose;
    }
    expected
}

#[test]
fn event_round_trip_touches_exactly_the_scored_copies() {
    let engine = DoseConversionEngine::shared().expect("shared engine should build");
    let config = ScorerConfig::new(Geometry::Ap, 8.0);
    let mut scorer =
        EffectiveDoseScorer::new("target", engine, config).expect("scorer should build");

    for event_id in 0..6 {
        let steps = event_steps(event_id);
        scorer
            .on_event_boundary(EventBoundary::Begin { event_id })
            .expect("begin should succeed");
        for step in &steps {
            scorer.on_step(step).expect("step should be scored");
        }
        let event = scorer
            .on_event_boundary(EventBoundary::End)
            .expect("end should succeed")
            .expect("end publishes the map");

        let expected = expected_doses(engine, &config, &steps);
        assert_eq!(event.event_id, event_id);
        assert_eq!(
            event.doses.keys().collect::<Vec<_>>(),
            expected.keys().collect::<Vec<_>>()
        );
        for (copy_index, dose) in &expected {
            let actual = event.get(*copy_index).expect("scored copy should be present");
            assert!(
                (actual - dose).abs() <= 1.0e-12 * dose.abs().max(1.0),
                "event {} copy {} expected {} got {}",
                event_id,
                copy_index,
                dose,
                actual
            );
        }
        assert!(event.get((event_id % 3) as i32 + 20).is_none());
        let expected_total: f64 = expected.values().sum();
        assert!((event.total() - expected_total).abs() <= 1.0e-12 * expected_total.max(1.0));
    }
}

#[test]
fn workers_with_independent_scorers_agree_with_a_serial_run() {
    let engine = DoseConversionEngine::icrp116().expect("ICRP 116 tables should validate");
    let config = ScorerConfig::new(Geometry::Iso, 1.0).with_dose_unit(DoseUnit::Nanosievert);
    let event_ids: Vec<u64> = (0..24).collect();

    let run_worker = |ids: &[u64]| -> RunTally {
        let mut scorer =
            EffectiveDoseScorer::new("worker", &engine, config).expect("scorer should build");
        let mut tally = RunTally::new();
        for event_id in ids {
            scorer.begin_event(*event_id).expect("begin should succeed");
            for step in event_steps(*event_id) {
                scorer.on_step(&step).expect("step should be scored");
            }
            let event = scorer.end_event().expect("end should succeed");
            tally.record(&event).expect("record should succeed");
        }
        tally
    };

    let serial = run_worker(&event_ids[..]);

    let worker = &run_worker;
    let mut merged = RunTally::new();
    std::thread::scope(|scope| {
        let handles = event_ids
            .chunks(6)
            .map(|chunk| scope.spawn(move || worker(chunk)))
            .collect::<Vec<_>>();
        for handle in handles {
            let tally = handle.join().expect("worker should not panic");
            merged.merge(tally).expect("merge should succeed");
        }
    });

    assert_eq!(merged.events(), serial.events());
    assert_eq!(merged.unit(), Some(DoseUnit::Nanosievert));
    let serial_summaries = serial.summaries();
    let merged_summaries = merged.summaries();
    assert_eq!(serial_summaries.len(), merged_summaries.len());
    for (left, right) in serial_summaries.iter().zip(&merged_summaries) {
        assert_eq!(left.copy_index, right.copy_index);
        assert_eq!(left.hit_events, right.hit_events);
        assert!((left.total - right.total).abs() <= 1.0e-12 * left.total.max(1.0));
    }
}

#[test]
fn out_of_order_boundaries_surface_as_contract_violations() {
    let engine = DoseConversionEngine::icrp116().expect("ICRP 116 tables should validate");
    let mut scorer = EffectiveDoseScorer::new("target", &engine, ScorerConfig::default())
        .expect("scorer should build");

    let error = scorer
        .on_event_boundary(EventBoundary::End)
        .expect_err("end before begin should fail");
    assert_eq!(error.category(), DoseErrorCategory::ContractViolation);
    assert!(error.category().aborts_run());

    scorer
        .on_event_boundary(EventBoundary::Begin { event_id: 0 })
        .expect("begin should succeed");
    let error = scorer
        .on_event_boundary(EventBoundary::Begin { event_id: 1 })
        .expect_err("second begin should fail");
    assert_eq!(error.placeholder(), "EVENT.OUT_OF_ORDER");
}
