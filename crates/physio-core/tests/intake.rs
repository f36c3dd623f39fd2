use physio_core::models::answer::Answer;
use physio_core::models::intake::{Intake, Severity, SubRecord};
use physio_core::CoreError;
use serde_json::json;

#[test]
fn empty_object_is_an_empty_intake() {
    let intake = Intake::from_value(json!({})).unwrap();
    assert!(intake.pain.locations.is_empty());
    assert!(intake.mobility.is_empty());
    assert!(intake.ros.is_empty());
    assert_eq!(intake.profile.age, None);
}

#[test]
fn null_sections_default_to_empty() {
    let intake = Intake::from_value(json!({
        "pain": null,
        "sleep": null,
        "profile": null,
        "ros": null,
    }))
    .unwrap();
    assert_eq!(intake.pain.pain_level, 0.0);
    assert!(intake.sleep.is_empty());
}

#[test]
fn non_object_intake_is_rejected() {
    for bad in [json!([]), json!("pain"), json!(3), json!(null)] {
        let err = Intake::from_value(bad).unwrap_err();
        assert!(matches!(err, CoreError::MalformedIntake(_)));
    }
}

#[test]
fn unknown_top_level_key_is_ignored() {
    let intake = Intake::from_value(json!({ "vitals": { "hr": 80 }, "pain": { "locations": ["neck"] } }))
        .unwrap();
    assert_eq!(intake.pain.locations, ["neck"]);
}

#[test]
fn psychosocial_alias_lands_in_social() {
    let intake = Intake::from_value(json!({ "psychosocial": { "stress_level": 8 } })).unwrap();
    assert_eq!(intake.social.number("stress_level").unwrap(), Some(8.0));
}

#[test]
fn top_level_ros_answers_move_under_ros() {
    let intake = Intake::from_value(json!({
        "pain": {},
        "ROS_Fever": "yes",
        "rf_saddle": false,
        "ros_weight": "yes",
        "ros": { "ros_weight": "no" }
    }))
    .unwrap();
    assert_eq!(intake.ros["ros_fever"], Answer::Yes);
    assert_eq!(intake.ros["rf_saddle"], Answer::No);
    assert_eq!(intake.ros["ros_weight"], Answer::No);
}

#[test]
fn top_level_ros_answers_fill_a_null_ros_section() {
    let intake = Intake::from_value(json!({ "ros": null, "ros_chills": "yes" })).unwrap();
    assert_eq!(intake.ros["ros_chills"], Answer::Yes);
}

#[test]
fn mistyped_ros_section_is_rejected() {
    let err = Intake::from_value(json!({ "ros": 3, "ros_fever": "yes" })).unwrap_err();
    assert!(matches!(err, CoreError::MalformedIntake(_)));
}

#[test]
fn mistyped_pain_field_is_rejected() {
    let err = Intake::from_value(json!({ "pain": { "locations": 4 } })).unwrap_err();
    assert!(matches!(err, CoreError::MalformedIntake(_)));
}

#[test]
fn ergonomics_alias_lands_in_ergo() {
    let intake = Intake::from_value(json!({ "ergonomics": { "score": 40 } })).unwrap();
    assert_eq!(intake.ergo.number("score").unwrap(), Some(40.0));
}

#[test]
fn ros_answers_resolve_tri_state() {
    let intake = Intake::from_json(
        r#"{ "ros": { "ros_fever": "Yes", "ros_weight": true, "ros_sweat": "maybe", "ros_chills": "no" } }"#,
    )
    .unwrap();
    assert_eq!(intake.ros["ros_fever"], Answer::Yes);
    assert_eq!(intake.ros["ros_weight"], Answer::Yes);
    assert_eq!(intake.ros["ros_sweat"], Answer::Unknown);
    assert_eq!(intake.ros["ros_chills"], Answer::No);
}

#[test]
fn severity_parses_from_free_text() {
    assert_eq!(" Severe ".parse::<Severity>().unwrap(), Severity::Severe);
    assert!("extreme".parse::<Severity>().is_err());
}

#[test]
fn sub_record_accessors() {
    let record = SubRecord::from(json!({
        "score": "72",
        "hours": 6,
        "flags": "smoker",
        "fear_movement": "yes",
        "bloating": false,
        "bad": { "nested": true },
    }));
    assert_eq!(record.number("score").unwrap(), Some(72.0));
    assert_eq!(record.number("hours").unwrap(), Some(6.0));
    assert_eq!(record.number("missing").unwrap(), None);
    assert!(record.number("bad").is_err());
    assert_eq!(record.tags("flags").unwrap(), vec!["smoker".to_string()]);
    assert!(record.tags("bad").is_err());
    assert_eq!(record.affirmed_keys(), vec!["fear_movement"]);
}

#[test]
fn merged_prefers_right_hand_keys() {
    let social = SubRecord::from(json!({ "stress_level": 2, "isolated": "yes" }));
    let stress = SubRecord::from(json!({ "stress_level": 7 }));
    let merged = social.merged(&stress);
    assert_eq!(merged.number("stress_level").unwrap(), Some(7.0));
    assert_eq!(merged.answer("isolated"), Answer::Yes);
}
