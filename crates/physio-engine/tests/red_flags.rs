use std::sync::Arc;

use physio_core::models::intake::Intake;
use physio_engine::RedFlagEngine;
use physio_knowledge::KnowledgeBase;
use serde_json::json;

fn engine() -> RedFlagEngine {
    RedFlagEngine::new(Arc::new(KnowledgeBase::load().unwrap()))
}

fn intake(value: serde_json::Value) -> Intake {
    Intake::from_value(value).unwrap()
}

#[test]
fn any_single_cauda_equina_sign_flags() {
    for tag in [
        "saddle_anesthesia",
        "bladder_retention",
        "bowel_incontinence",
        "bilateral_leg_weakness",
    ] {
        let report = engine().scan(&intake(json!({ "pain": { "red_flags_symptoms": [tag] } })));
        assert!(report.has("cauda_equina"), "{tag} alone must flag cauda equina");
        let flag = &report.flags[0];
        assert_eq!(flag.matched_tags.len(), 1);
        assert!(flag.matched_tags.contains(tag));
    }
}

#[test]
fn cauda_equina_flags_from_red_flag_answers() {
    let report = engine().scan(&intake(json!({ "ros": { "rf_saddle": "yes" } })));
    assert!(report.has("cauda_equina"));
}

#[test]
fn constitutional_answers_flag_malignancy() {
    let report = engine().scan(&intake(json!({
        "ros": { "ros_fever": "yes", "ros_weight": "yes", "ros_sweat": true }
    })));
    assert!(report.has("malignancy"));
    assert!(report.has("infection"));

    let malignancy = report
        .flags
        .iter()
        .find(|f| f.condition_id == "malignancy")
        .unwrap();
    assert!(malignancy.matched_tags.contains("unexplained_weight_loss"));
    assert!(malignancy.matched_tags.contains("night_sweats"));
}

#[test]
fn free_text_symptoms_are_normalised() {
    let report = engine().scan(&intake(json!({
        "pain": { "red_flags_symptoms": ["Unexplained Weight Loss", "Severe Night Sweats"] }
    })));
    assert!(report.has("malignancy"));
}

#[test]
fn negative_and_unknown_answers_do_not_flag() {
    let report = engine().scan(&intake(json!({
        "ros": { "ros_fever": "no", "ros_weight": "unsure", "rf_saddle": false, "ros_sweat": null }
    })));
    assert!(report.is_clear(), "{report:?}");
}

#[test]
fn empty_intake_is_clear() {
    assert!(engine().scan(&Intake::default()).is_clear());
}

#[test]
fn history_answers_feed_the_scan() {
    let report = engine().scan(&intake(json!({
        "history": { "history_cancer": "yes", "steroid_use": "no", "flags": ["Recent Surgery"] }
    })));
    assert!(report.has("malignancy"));
    assert!(report.has("infection"));
    assert!(!report.has("fracture"));
}

#[test]
fn age_over_seventy_flags_fracture_risk() {
    let old = engine().scan(&intake(json!({ "profile": { "age": 75 } })));
    let flag = old.flags.iter().find(|f| f.condition_id == "fracture").unwrap();
    assert!(flag.matched_tags.contains("age_gt_70"));

    assert!(engine().scan(&intake(json!({ "profile": { "age": 70 } }))).is_clear());
}

#[test]
fn every_condition_is_evaluated() {
    let report = engine().scan(&intake(json!({
        "pain": {
            "red_flags_symptoms": [
                "bowel_incontinence", "trauma_history", "night_sweats",
                "chills", "jaw_pain", "calf_swelling"
            ]
        }
    })));
    let flagged: Vec<_> = report.flags.iter().map(|f| f.condition_id.as_str()).collect();
    assert_eq!(
        flagged,
        [
            "cauda_equina",
            "fracture",
            "malignancy",
            "infection",
            "myocardial_infarction",
            "dvt"
        ]
    );
}

#[test]
fn scan_is_deterministic() {
    let value = json!({
        "pain": { "red_flags_symptoms": ["fever", "saddle_anesthesia"] },
        "ros": { "ros_weight": "yes" },
        "profile": { "age": 72 }
    });
    let first = serde_json::to_string(&engine().scan(&intake(value.clone()))).unwrap();
    for _ in 0..5 {
        assert_eq!(first, serde_json::to_string(&engine().scan(&intake(value.clone()))).unwrap());
    }
}

#[test]
fn review_of_systems_ids_in_history_are_aliased() {
    let report = engine().scan(&intake(json!({
        "history": { "ros_weight": "yes", "ros_sweat": "yes" }
    })));
    let malignancy = report
        .flags
        .iter()
        .find(|f| f.condition_id == "malignancy")
        .unwrap();
    assert!(malignancy.matched_tags.contains("unexplained_weight_loss"));
    assert!(malignancy.matched_tags.contains("night_sweats"));
}

#[test]
fn review_of_systems_ids_in_symptoms_are_aliased() {
    let report = engine().scan(&intake(json!({
        "pain": { "red_flags_symptoms": ["rf_bladder"] }
    })));
    assert!(report.has("cauda_equina"));
}

#[test]
fn partial_history_keys_flag() {
    let report = engine().scan(&intake(json!({ "history": { "cancer": "yes" } })));
    let flagged: Vec<_> = report.flags.iter().map(|f| f.condition_id.as_str()).collect();
    assert_eq!(flagged, ["malignancy"]);
    assert!(report.flags[0].matched_tags.contains("history_cancer"));
}

#[test]
fn partial_free_text_symptoms_flag() {
    for (symptom, condition) in [
        ("Weight Loss", "malignancy"),
        ("Saddle Anesthesia", "cauda_equina"),
        ("saddle", "cauda_equina"),
        ("Sweats", "malignancy"),
    ] {
        let report = engine().scan(&intake(json!({ "pain": { "red_flags_symptoms": [symptom] } })));
        assert!(report.has(condition), "{symptom} must flag {condition}");
    }
}

#[test]
fn generic_or_recognised_partials_do_not_flag() {
    let report = engine().scan(&intake(json!({
        "pain": { "red_flags_symptoms": ["Numbness", "Focal Weakness", "pain"] },
        "history": { "recent_history": "yes" }
    })));
    assert!(report.is_clear(), "{report:?}");
}

#[test]
fn history_only_intake_still_flags() {
    let report = engine().scan(&intake(json!({
        "history": {
            "osteoporosis": "yes",
            "drug_use": true,
            "flags": ["Chest Pressure"]
        }
    })));
    let flagged: Vec<_> = report.flags.iter().map(|f| f.condition_id.as_str()).collect();
    assert_eq!(flagged, ["fracture", "infection", "myocardial_infarction"]);
}
