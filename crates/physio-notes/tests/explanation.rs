use physio_notes::explanation::{compose_explanation, ExplanationContext};

#[test]
fn explanation_without_red_flags() {
    let text = compose_explanation(&ExplanationContext {
        diagnosis: "lumbar disc herniation".to_string(),
        severity: "Moderate".to_string(),
        red_flags: Vec::new(),
        weeks_min: 6,
        weeks_max: 12,
    })
    .unwrap();
    assert_eq!(
        text,
        "Based on the clinical presentation, the primary hypothesis is lumbar disc herniation. \
         This is consistent with a moderate presentation. \
         Recovery is estimated at 6-12 weeks with adherence to the plan."
    );
}

#[test]
fn explanation_mentions_red_flags() {
    let text = compose_explanation(&ExplanationContext {
        diagnosis: "undetermined mechanical pain".to_string(),
        severity: "Severe".to_string(),
        red_flags: vec!["cauda equina".to_string(), "infection".to_string()],
        weeks_min: 6,
        weeks_max: 12,
    })
    .unwrap();
    assert!(text.contains("point to cauda equina, infection, which needs a medical review"));
    assert!(text.contains("a severe presentation."));
}
