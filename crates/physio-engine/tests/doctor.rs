use std::sync::Arc;

use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::{Intake, SubRecord};
use physio_engine::specialists::NEUTRAL_SCORE;
use physio_engine::{Doctor, Domain, Specialist, SpecialistError, FALLBACK_DIAGNOSIS};
use physio_knowledge::KnowledgeBase;
use serde_json::json;

fn doctor() -> Doctor {
    Doctor::new(Arc::new(KnowledgeBase::load().unwrap()))
}

struct BrokenSleep;

impl Specialist for BrokenSleep {
    fn domain(&self) -> Domain {
        Domain::Sleep
    }

    fn analyze(&self, _record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        Err(SpecialistError::Failed("sleep tracker offline".to_string()))
    }
}

#[test]
fn full_consult_on_radicular_presentation() {
    let result = doctor()
        .consult_value(json!({
            "pain": {
                "locations": ["low_back", "leg", "foot", "big_toe"],
                "quality": ["shooting", "electric"],
                "aggravators": ["sitting", "bending_forward"],
                "pain_level": 7
            },
            "mobility": { "score": 35 },
            "posture": { "forward_head": "yes" },
            "sleep": { "hours": 5, "consistency": "poor" },
            "stress": { "stress_level": 4, "fear_movement": true },
            "strength": { "score": 30 },
            "profile": { "age": 45 }
        }))
        .unwrap();

    assert_eq!(result.diagnosis.primary, "lumbar_disc_herniation");
    assert_eq!(result.prognosis.weeks_min, 6);
    assert_eq!(result.prognosis.weeks_max, 12);
    assert!(result.safety.is_clear());

    let pain = result.module("pain").unwrap();
    assert_eq!(pain.finding_str("type"), Some("neuropathic"));
    assert_eq!(pain.finding_list("dermatomes"), ["L5", "L4"]);
    assert!((pain.score - 30.0).abs() < 1e-9);

    assert_eq!(result.modules.len(), 11);
    assert_eq!(result.scores.len(), 11);
    assert_eq!(result.scores["Mobility"], 35.0);
    assert_eq!(result.scores["Stress"], 50.0);

    let soap = &result.soap_report;
    assert_eq!(
        soap.subjective,
        "Patient reports neuropathic pain (Level 7/10). Psychosocial load: 5/10."
    );
    assert!(soap.objective.starts_with("Functional Movement Score: 35/100. Posture: Forward Head Posture."));
    assert!(soap.objective.ends_with("Dermatomal distribution: L5, L4."));
    assert_eq!(
        soap.assessment,
        "Primary Diag: lumbar_disc_herniation. Risk Profile: high. Prognosis: 6-12 weeks."
    );
    assert!(soap.plan.starts_with("Focus: Foundational Strength."));
    assert!(soap.plan.contains("Extend sleep window to 7-9 hours"));
}

#[test]
fn empty_intake_produces_complete_result() {
    let result = doctor().consult(&Intake::default());

    assert!(result.diagnosis.top_candidates.is_empty());
    assert_eq!(result.diagnosis.primary, FALLBACK_DIAGNOSIS);
    assert_eq!(result.prognosis.weeks_min, 4);
    assert_eq!(result.prognosis.weeks_max, 8);
    assert!(result.safety.is_clear());
    assert_eq!(result.modules.len(), 11);
    assert!(result.modules.values().all(|m| m.failure.is_none()));
    assert!(!result.soap_report.subjective.is_empty());
    assert!(!result.soap_report.plan.is_empty());
}

#[test]
fn failing_specialist_is_isolated() {
    let doctor = doctor().with_specialist(Box::new(BrokenSleep));
    let result = doctor.consult_value(json!({ "pain": { "locations": ["neck"] } })).unwrap();

    let sleep = result.module("sleep").unwrap();
    assert_eq!(sleep.score, NEUTRAL_SCORE);
    assert_eq!(sleep.failure.as_deref(), Some("sleep tracker offline"));
    assert_eq!(result.scores["Sleep"], NEUTRAL_SCORE);
    assert!(result.module("pain").unwrap().failure.is_none());
    assert!(!result.diagnosis.top_candidates.is_empty());
}

#[test]
fn mistyped_sub_record_field_fails_only_that_domain() {
    let result = doctor()
        .consult_value(json!({
            "cardio": { "risk_factors": 12 },
            "physique": { "height_cm": 0, "weight_kg": 70 }
        }))
        .unwrap();

    let cardio = result.module("cardio").unwrap();
    assert_eq!(cardio.score, NEUTRAL_SCORE);
    assert!(cardio.failure.as_deref().unwrap().contains("risk_factors"));
    assert!(result.module("physique").unwrap().failure.is_some());
    assert!(result.module("mobility").unwrap().failure.is_none());
}

#[test]
fn red_flags_visible_without_candidates() {
    let result = doctor()
        .consult_value(json!({
            "pain": { "red_flags_symptoms": ["saddle_anesthesia"] }
        }))
        .unwrap();

    assert!(result.diagnosis.top_candidates.is_empty());
    assert!(result.safety.has("cauda_equina"));
    assert!(result.soap_report.assessment.contains("Red flags: CAUDA_EQUINA."));
    assert!(result.soap_report.plan.starts_with("Refer for medical review"));
}

#[test]
fn supplied_severity_is_used() {
    let result = doctor()
        .consult_value(json!({
            "pain": {
                "locations": ["low_back", "leg", "foot"],
                "quality": ["shooting", "electric"],
                "aggravators": ["sitting", "bending_forward"],
                "severity": "severe"
            }
        }))
        .unwrap();
    assert_eq!(result.diagnosis.primary, "lumbar_disc_herniation");
    assert_eq!(result.prognosis.weeks_min, 9);
    assert_eq!(result.prognosis.weeks_max, 18);
}

#[test]
fn malformed_intake_is_rejected() {
    assert!(doctor().consult_value(json!([1, 2, 3])).is_err());
    assert!(doctor().consult_value(json!({ "pain": { "locations": 5 } })).is_err());
}

#[test]
fn psychosocial_section_name_is_accepted() {
    let result = doctor()
        .consult_value(json!({
            "pain": { "locations": ["neck"] },
            "psychosocial": { "stress_level": 8 }
        }))
        .unwrap();

    let psychosocial = result.module("psychosocial").unwrap();
    assert_eq!(psychosocial.finding_f64("allostatic_load"), Some(8.0));
    assert_eq!(result.scores["Stress"], 20.0);
}

#[test]
fn flat_review_of_systems_answers_reach_the_scan() {
    let result = doctor()
        .consult_value(json!({
            "pain": {},
            "ros_fever": "yes",
            "ros_weight": "yes",
            "ros_sweat": "yes"
        }))
        .unwrap();

    assert!(result.safety.has("malignancy"));
    assert!(result.safety.has("infection"));
    assert_eq!(result.diagnosis.primary, FALLBACK_DIAGNOSIS);
}

#[test]
fn unrecognised_sections_are_ignored() {
    let result = doctor()
        .consult_value(json!({ "vitals": { "hr": 80 }, "pain": { "locations": ["neck"] } }))
        .unwrap();
    assert!(!result.diagnosis.top_candidates.is_empty());
}

#[test]
fn doctor_is_shareable_across_threads() {
    let doctor = Arc::new(doctor());
    let handles: Vec<_> = (0..4)
        .map(|age| {
            let doctor = Arc::clone(&doctor);
            std::thread::spawn(move || {
                let intake = Intake::from_value(json!({
                    "pain": { "locations": ["neck"], "quality": ["spasm"] },
                    "profile": { "age": 40 + age * 10 }
                }))
                .unwrap();
                doctor.consult(&intake).diagnosis.primary
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "torticollis");
    }
}
