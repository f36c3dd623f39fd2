use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A spinal nerve-root level and the skin regions it supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dermatome {
    pub level: String,
    pub regions: Vec<String>,
}

/// Cranial-to-caudal order. Lookup walks this order, so the first level
/// listing a region wins (`radial_forearm` resolves to C5, not C6).
const DERMATOMES: &[(&str, &[&str])] = &[
    ("C2", &["occipital_region", "upper_neck"]),
    ("C3", &["neck_lateral", "supraclavicular_fossa"]),
    ("C4", &["shoulder_upper", "clavicle_region"]),
    ("C5", &["lateral_arm", "deltoid_region", "radial_forearm"]),
    ("C6", &["thumb", "index_finger", "radial_forearm", "biceps_region"]),
    ("C7", &["middle_finger", "triceps_region", "mid_palm"]),
    ("C8", &["ring_finger", "little_finger", "ulnar_forearm", "ulnar_palm"]),
    ("T1", &["medial_forearm", "medial_elbow", "axilla_lower"]),
    ("T2", &["axilla", "upper_chest", "scapula_medial"]),
    ("T4", &["nipple_level", "mid_chest"]),
    ("T10", &["umbilicus", "mid_abdomen"]),
    ("L1", &["inguinal_region", "groin", "upper_thigh_medial"]),
    ("L2", &["thigh_anterior", "thigh_medial_upper"]),
    ("L3", &["knee_medial", "thigh_lower", "thigh_anterior"]),
    ("L4", &["medial_foot", "big_toe", "medial_malleolus", "knee_anterior"]),
    ("L5", &["lateral_leg", "dorsum_foot", "toes_2_3_4", "plantar_foot_upper"]),
    ("S1", &["lateral_foot", "posterior_leg", "little_toe", "heel", "plantar_foot"]),
    ("S2", &["posterior_thigh", "popliteal_fossa", "posterior_leg_medial"]),
];

pub fn builtin() -> Vec<Dermatome> {
    DERMATOMES
        .iter()
        .map(|(level, regions)| Dermatome {
            level: level.to_string(),
            regions: regions.iter().map(|r| r.to_string()).collect(),
        })
        .collect()
}
