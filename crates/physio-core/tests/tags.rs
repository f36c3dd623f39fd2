use physio_core::tags::{has_specific_segment, normalize_all, normalize_tag, tag_contains};

#[test]
fn normalizes_free_text() {
    assert_eq!(normalize_tag("Unexplained Weight Loss"), "unexplained_weight_loss");
    assert_eq!(normalize_tag("  Low  Back "), "low_back");
    assert_eq!(normalize_tag("bending-forward"), "bending_forward");
    assert_eq!(normalize_tag("neck / shoulder"), "neck_shoulder");
    assert_eq!(normalize_tag("__saddle__anesthesia_"), "saddle_anesthesia");
    assert_eq!(normalize_tag("   "), "");
}

#[test]
fn normalize_all_drops_blanks() {
    let raw = vec!["Leg".to_string(), " ".to_string(), "Foot".to_string()];
    assert_eq!(normalize_all(&raw), vec!["leg", "foot"]);
}

#[test]
fn contains_respects_segment_boundaries() {
    assert!(tag_contains("night_sweats", "night_sweats"));
    assert!(tag_contains("severe_night_sweats", "night_sweats"));
    assert!(tag_contains("night_sweats_daily", "night_sweats"));
    assert!(!tag_contains("sweats", "night_sweats"));
    assert!(!tag_contains("feverish", "fever"));
    assert!(!tag_contains("fever", ""));
}

#[test]
fn specific_segments() {
    assert!(has_specific_segment("weight_loss"));
    assert!(has_specific_segment("cancer"));
    assert!(has_specific_segment("sweats"));
    assert!(!has_specific_segment("recent_history"));
    assert!(!has_specific_segment("age_gt_70"));
    assert!(!has_specific_segment("pain"));
    assert!(!has_specific_segment(""));
}
