use std::collections::BTreeSet;

use physio_knowledge::{
    Dermatome, KnowledgeBase, KnowledgeError, KnowledgeTables, PathologySignature,
    RedFlagCriterion,
};

fn signature(id: &str, prior: f64) -> PathologySignature {
    PathologySignature {
        id: id.to_string(),
        regions: BTreeSet::from(["neck".to_string()]),
        quality: BTreeSet::new(),
        aggravators: BTreeSet::new(),
        relievers: BTreeSet::new(),
        risk_factors: BTreeSet::new(),
        associated_signs: BTreeSet::new(),
        red_flag: false,
        history_flag: None,
        probability_base: prior,
    }
}

#[test]
fn builtin_tables_load() {
    let kb = KnowledgeBase::load().expect("built-in tables are valid");
    assert_eq!(kb.signatures().len(), 35);
    assert_eq!(kb.red_flag_criteria().len(), 6);
    assert_eq!(kb.dermatomes().len(), 18);
}

#[test]
fn signature_lookup_by_id() {
    let kb = KnowledgeBase::load().unwrap();
    let disc = kb.signature("lumbar_disc_herniation").unwrap();
    assert_eq!(disc.probability_base, 0.2);
    assert!(disc.regions.contains("low_back"));
    assert!(kb.signature("cervical_myelopathy").unwrap().red_flag);
    assert_eq!(
        kb.signature("inversion_sprain").unwrap().history_flag.as_deref(),
        Some("trauma_roll")
    );
    assert!(kb.signature("unknown").is_none());
}

#[test]
fn builtin_signature_ids_are_unique_and_priors_in_range() {
    let kb = KnowledgeBase::load().unwrap();
    let ids: BTreeSet<_> = kb.signatures().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), kb.signatures().len());
    assert!(kb
        .signatures()
        .iter()
        .all(|s| (0.0..=1.0).contains(&s.probability_base)));
}

#[test]
fn every_criterion_tag_is_an_intake_tag() {
    let kb = KnowledgeBase::load().unwrap();
    for criterion in kb.red_flag_criteria() {
        assert!(!criterion.tags.is_empty(), "{}", criterion.condition_id);
        for tag in &criterion.tags {
            assert!(kb.is_intake_tag(tag), "{} -> {tag}", criterion.condition_id);
        }
    }
}

#[test]
fn dermatome_lookup_is_substring_tolerant() {
    let kb = KnowledgeBase::load().unwrap();
    assert_eq!(kb.dermatome_for("big_toe"), Some("L4"));
    assert_eq!(kb.dermatome_for("Little Toe"), Some("S1"));
    // query contains the table entry
    assert_eq!(kb.dermatome_for("heel_pain"), Some("S1"));
    // table entry contains the query
    assert_eq!(kb.dermatome_for("umbilic"), Some("T10"));
    assert_eq!(kb.dermatome_for("low_back"), None);
    assert_eq!(kb.dermatome_for(""), None);
}

#[test]
fn dermatome_lookup_first_match_wins() {
    let kb = KnowledgeBase::load().unwrap();
    // radial_forearm is listed under both C5 and C6
    assert_eq!(kb.dermatome_for("radial_forearm"), Some("C5"));
    // thigh_anterior is listed under both L2 and L3
    assert_eq!(kb.dermatome_for("thigh_anterior"), Some("L2"));
}

#[test]
fn ros_aliases_resolve() {
    let kb = KnowledgeBase::load().unwrap();
    assert_eq!(kb.ros_alias("ros_weight"), Some("unexplained_weight_loss"));
    assert_eq!(kb.ros_alias("rf_saddle"), Some("saddle_anesthesia"));
    assert_eq!(kb.ros_alias("ros_unknown"), None);
}

#[test]
fn duplicate_signature_id_fails_load() {
    let mut tables = KnowledgeTables::builtin();
    tables.signatures.push(signature("torticollis", 0.1));
    assert_eq!(
        KnowledgeBase::from_tables(tables).unwrap_err(),
        KnowledgeError::DuplicateSignature("torticollis".to_string())
    );
}

#[test]
fn out_of_range_prior_fails_load() {
    for bad in [-0.1, 1.5, f64::NAN] {
        let mut tables = KnowledgeTables::builtin();
        tables.signatures.push(signature("new_condition", bad));
        let err = KnowledgeBase::from_tables(tables).unwrap_err();
        assert!(matches!(err, KnowledgeError::PriorOutOfRange { .. }), "{bad}");
    }
}

#[test]
fn boundary_priors_are_accepted() {
    let mut tables = KnowledgeTables::builtin();
    tables.signatures.push(signature("certain", 1.0));
    tables.signatures.push(signature("impossible", 0.0));
    assert!(KnowledgeBase::from_tables(tables).is_ok());
}

#[test]
fn empty_criterion_fails_load() {
    let mut tables = KnowledgeTables::builtin();
    tables.red_flags.push(RedFlagCriterion {
        condition_id: "aneurysm".to_string(),
        tags: BTreeSet::new(),
    });
    assert_eq!(
        KnowledgeBase::from_tables(tables).unwrap_err(),
        KnowledgeError::EmptyCriterion("aneurysm".to_string())
    );
}

#[test]
fn unrecognized_criterion_tag_fails_load() {
    let mut tables = KnowledgeTables::builtin();
    tables.red_flags.push(RedFlagCriterion {
        condition_id: "aneurysm".to_string(),
        tags: BTreeSet::from(["pulsatile_mass".to_string()]),
    });
    assert_eq!(
        KnowledgeBase::from_tables(tables).unwrap_err(),
        KnowledgeError::UnrecognizedTag {
            source_id: "aneurysm".to_string(),
            tag: "pulsatile_mass".to_string(),
        }
    );
}

#[test]
fn duplicate_criterion_fails_load() {
    let mut tables = KnowledgeTables::builtin();
    let copy = tables.red_flags[0].clone();
    tables.red_flags.push(copy);
    assert_eq!(
        KnowledgeBase::from_tables(tables).unwrap_err(),
        KnowledgeError::DuplicateCriterion("cauda_equina".to_string())
    );
}

#[test]
fn unrecognized_history_flag_fails_load() {
    let mut tables = KnowledgeTables::builtin();
    let mut sig = signature("ski_thumb", 0.1);
    sig.history_flag = Some("trauma_ski".to_string());
    tables.signatures.push(sig);
    assert!(matches!(
        KnowledgeBase::from_tables(tables).unwrap_err(),
        KnowledgeError::UnrecognizedTag { .. }
    ));
}

#[test]
fn empty_dermatome_fails_load() {
    let mut tables = KnowledgeTables::builtin();
    tables.dermatomes.push(Dermatome {
        level: "S3".to_string(),
        regions: Vec::new(),
    });
    assert_eq!(
        KnowledgeBase::from_tables(tables).unwrap_err(),
        KnowledgeError::EmptyDermatome("S3".to_string())
    );
}
