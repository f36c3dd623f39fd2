use std::collections::BTreeMap;

use physio_core::models::consult::SoapNote;
use physio_core::models::quality::ReliabilityReport;
use physio_core::models::summary::Summary;
use physio_notes::summary::render_summary_markdown;

fn summary() -> Summary {
    Summary {
        diagnosis: "LUMBAR DISC HERNIATION".to_string(),
        severity: "Moderate".to_string(),
        red_flags: vec!["CAUDA_EQUINA Risk".to_string()],
        scores: BTreeMap::from([("Pain".to_string(), 30.0), ("Sleep".to_string(), 72.4)]),
        quality_control: Some(ReliabilityReport {
            score: 80.0,
            is_reliable: true,
            warnings: vec!["2 answers left blank".to_string()],
            flags: Vec::new(),
        }),
        soap: SoapNote {
            subjective: "s".to_string(),
            objective: "o".to_string(),
            assessment: "a".to_string(),
            plan: "p".to_string(),
        },
        explanation: "Recovery is estimated at 6 weeks.".to_string(),
        is_ai: false,
        generated_at: "2026-01-01T00:00:00Z".parse::<jiff::Timestamp>().unwrap(),
    }
}

#[test]
fn markdown_contains_every_section() {
    let md = render_summary_markdown(&summary()).unwrap();
    assert!(md.starts_with("# Assessment Summary"));
    assert!(md.contains("**Diagnosis:** LUMBAR DISC HERNIATION"));
    assert!(md.contains("Rule-based report"));
    assert!(md.contains("- CAUDA_EQUINA Risk"));
    assert!(md.contains("- Pain: 30/100"));
    assert!(md.contains("- Sleep: 72/100"));
    assert!(md.contains("- **A:** a"));
    assert!(md.contains("Score 80/100 (reliable)"));
    assert!(md.contains("- 2 answers left blank"));
    assert!(md.contains("Generated 2026-01-01T00:00:00Z"));
}

#[test]
fn sections_without_data_are_omitted() {
    let mut s = summary();
    s.red_flags.clear();
    s.quality_control = None;
    s.is_ai = true;
    let md = render_summary_markdown(&s).unwrap();
    assert!(!md.contains("## Red Flags"));
    assert!(!md.contains("## Answer Reliability"));
    assert!(md.contains("AI-assisted report"));
}
