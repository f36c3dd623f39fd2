use std::sync::Arc;

use physio_core::models::intake::{Profile, Severity};
use physio_engine::{DifferentialDiagnosisEngine, RecoveryTrajectoryEngine, SymptomSnapshot};
use physio_knowledge::KnowledgeBase;
use proptest::prelude::*;
use proptest::sample::subsequence;

const REGIONS: &[&str] = &[
    "low_back", "leg", "foot", "neck", "shoulder", "knee_anterior", "heel", "wrist", "groin",
    "buttock", "elbow_lateral",
];
const QUALITIES: &[&str] = &["sharp", "dull", "shooting", "burning", "aching", "stiffness", "electric"];
const AGGRAVATORS: &[&str] = &["sitting", "walking", "stairs", "gripping", "overhead_reaching", "running"];

fn diagnosis_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("lumbar_disc_herniation".to_string()),
        Just("achilles_tendinopathy".to_string()),
        Just("knee_osteoarthritis".to_string()),
        Just("inversion_sprain".to_string()),
        Just("undetermined_mechanical_pain".to_string()),
        "[a-z_]{0,24}",
    ]
}

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![Just(Severity::Mild), Just(Severity::Moderate), Just(Severity::Severe)]
}

fn profile(age: Option<u32>) -> Profile {
    Profile { age, sex: None }
}

proptest! {
    #[test]
    fn predict_is_monotonic_in_severity(id in diagnosis_id(), age in proptest::option::of(10u32..95)) {
        let engine = RecoveryTrajectoryEngine::new();
        let p = profile(age);
        let mild = engine.predict(&id, Severity::Mild, &p);
        let moderate = engine.predict(&id, Severity::Moderate, &p);
        let severe = engine.predict(&id, Severity::Severe, &p);
        prop_assert!(mild.weeks_max <= moderate.weeks_max);
        prop_assert!(moderate.weeks_max <= severe.weeks_max);
    }

    #[test]
    fn predict_is_monotonic_past_the_age_threshold(id in diagnosis_id(), sev in severity(), young in 10u32..=50, old in 51u32..100) {
        let engine = RecoveryTrajectoryEngine::new();
        let y = engine.predict(&id, sev, &profile(Some(young)));
        let o = engine.predict(&id, sev, &profile(Some(old)));
        prop_assert!(o.weeks_max >= y.weeks_max);
        prop_assert_eq!(o.weeks_min, y.weeks_min);
    }

    #[test]
    fn prognosis_bounds_hold(id in diagnosis_id(), sev in severity(), age in proptest::option::of(0u32..120)) {
        let p = RecoveryTrajectoryEngine::new().predict(&id, sev, &profile(age));
        prop_assert!(p.weeks_min >= 1);
        prop_assert!(p.weeks_min <= p.weeks_max);
    }

    #[test]
    fn analyze_is_deterministic_and_bounded(
        locations in subsequence(REGIONS, 0..REGIONS.len()),
        quality in subsequence(QUALITIES, 0..QUALITIES.len()),
        aggravators in subsequence(AGGRAVATORS, 0..AGGRAVATORS.len()),
    ) {
        let engine = DifferentialDiagnosisEngine::new(Arc::new(KnowledgeBase::load().unwrap()));
        let snapshot = SymptomSnapshot::new(locations, quality, aggravators);

        let first = engine.analyze(&snapshot);
        let second = engine.analyze(&snapshot);
        prop_assert_eq!(&first, &second);

        prop_assert!(first.len() <= 5);
        prop_assert!(first.iter().all(|c| c.score > 0.0 && c.score <= 2.0));
        prop_assert!(first.windows(2).all(|w| w[0].score >= w[1].score));
        if snapshot.is_empty() {
            prop_assert!(first.is_empty());
        }
    }
}
