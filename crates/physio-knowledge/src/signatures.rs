use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The reference symptom profile of one condition.
///
/// Signatures are scored independently; `probability_base` values are
/// per-condition priors and need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PathologySignature {
    pub id: String,
    pub regions: BTreeSet<String>,
    pub quality: BTreeSet<String>,
    pub aggravators: BTreeSet<String>,
    pub relievers: BTreeSet<String>,
    pub risk_factors: BTreeSet<String>,
    pub associated_signs: BTreeSet<String>,
    /// The condition itself is a serious, refer-out pathology.
    pub red_flag: bool,
    /// History tag that makes this condition markedly more likely.
    pub history_flag: Option<String>,
    pub probability_base: f64,
}

struct SignatureDef {
    id: &'static str,
    regions: &'static [&'static str],
    quality: &'static [&'static str],
    aggravators: &'static [&'static str],
    relievers: &'static [&'static str],
    risk_factors: &'static [&'static str],
    associated_signs: &'static [&'static str],
    red_flag: bool,
    history_flag: Option<&'static str>,
    probability_base: f64,
}

const BASE: SignatureDef = SignatureDef {
    id: "",
    regions: &[],
    quality: &[],
    aggravators: &[],
    relievers: &[],
    risk_factors: &[],
    associated_signs: &[],
    red_flag: false,
    history_flag: None,
    probability_base: 0.0,
};

const SIGNATURES: &[SignatureDef] = &[
    // Cervical spine and neck
    SignatureDef {
        id: "cervical_radiculopathy",
        regions: &["neck", "arm", "hand", "scapula"],
        quality: &["shooting", "electric", "burning", "numbness"],
        aggravators: &["looking_up", "turning_head", "coughing", "sneezing", "spurlings_test"],
        relievers: &["hand_on_head", "rest", "supine"],
        risk_factors: &["age_gt_40", "sedentary_job", "smoking"],
        probability_base: 0.1,
        ..BASE
    },
    SignatureDef {
        id: "cervical_myelopathy",
        regions: &["neck", "hands_bilateral", "legs_bilateral"],
        quality: &["numbness", "clumsiness", "weakness", "gait_instability"],
        aggravators: &["neck_flexion", "walking"],
        red_flag: true,
        probability_base: 0.05,
        ..BASE
    },
    SignatureDef {
        id: "upper_cross_syndrome",
        regions: &["neck_base", "shoulders", "upper_back", "occiput"],
        quality: &["aching", "stiffness", "tension", "burning_ache"],
        aggravators: &["desk_work", "driving", "stress", "screen_time"],
        associated_signs: &["forward_head", "rounded_shoulders"],
        probability_base: 0.3,
        ..BASE
    },
    SignatureDef {
        id: "cervicogenic_headache",
        regions: &["occiput", "behind_eye", "temple", "neck_upper"],
        quality: &["dull", "aching", "pressure"],
        aggravators: &["sustained_posture", "neck_movement", "stress"],
        relievers: &["rest", "massage", "heat"],
        probability_base: 0.15,
        ..BASE
    },
    SignatureDef {
        id: "whiplash_associated_disorder",
        regions: &["neck", "upper_back", "shoulders"],
        quality: &["stiffness", "pain", "dizziness"],
        aggravators: &["movement", "static_posture"],
        history_flag: Some("trauma_mva"),
        probability_base: 0.1,
        ..BASE
    },
    SignatureDef {
        id: "torticollis",
        regions: &["neck"],
        quality: &["spasm", "sharp_on_movement", "locked"],
        aggravators: &["movement"],
        relievers: &["rest"],
        probability_base: 0.05,
        ..BASE
    },
    // Shoulder
    SignatureDef {
        id: "rotator_cuff_tendinopathy",
        regions: &["shoulder_lateral", "upper_arm", "deltoid_insertion"],
        quality: &["sharp_catches", "dull_ache", "weakness"],
        aggravators: &["overhead_reaching", "sleeping_on_side", "reaching_back"],
        probability_base: 0.25,
        ..BASE
    },
    SignatureDef {
        id: "adhesive_capsulitis",
        regions: &["shoulder", "upper_arm"],
        quality: &["stiffness", "aching", "restricted_movement"],
        aggravators: &["external_rotation", "abduction", "night_pain"],
        risk_factors: &["diabetes", "thyroid_issue", "female_40_60"],
        probability_base: 0.1,
        ..BASE
    },
    SignatureDef {
        id: "subacromial_impingement",
        regions: &["shoulder_anterolateral"],
        quality: &["pinching", "sharp_arc"],
        aggravators: &["overhead_activities", "internal_rotation"],
        probability_base: 0.2,
        ..BASE
    },
    SignatureDef {
        id: "labral_tear_slap",
        regions: &["shoulder_deep"],
        quality: &["clicking", "popping", "deep_ache"],
        aggravators: &["throwing", "overhead_pressure"],
        probability_base: 0.05,
        ..BASE
    },
    // Elbow and wrist
    SignatureDef {
        id: "lateral_epicondylalgia",
        regions: &["elbow_lateral", "forearm_extensors"],
        quality: &["burning", "aching"],
        aggravators: &["gripping", "typing", "lifting_palm_down"],
        probability_base: 0.15,
        ..BASE
    },
    SignatureDef {
        id: "medial_epicondylalgia",
        regions: &["elbow_medial", "forearm_flexors"],
        quality: &["aching", "sharp_with_grip"],
        aggravators: &["gripping", "lifting_palm_up"],
        probability_base: 0.05,
        ..BASE
    },
    SignatureDef {
        id: "carpal_tunnel_syndrome",
        regions: &["wrist", "thumb", "index_finger", "middle_finger"],
        quality: &["numbness", "tingling", "night_pain"],
        aggravators: &["typing", "driving", "sleeping"],
        relievers: &["shaking_hands"],
        probability_base: 0.15,
        ..BASE
    },
    SignatureDef {
        id: "de_quervains_tenosynovitis",
        regions: &["thumb_base", "wrist_radial"],
        quality: &["sharp", "aching"],
        aggravators: &["thumb_movement", "gripping", "texting"],
        probability_base: 0.1,
        ..BASE
    },
    // Thoracic and chest
    SignatureDef {
        id: "thoracic_outlet_syndrome",
        regions: &["neck", "shoulder", "arm", "hand"],
        quality: &["heaviness", "tingling", "coldness"],
        aggravators: &["overhead_posture", "carrying_heavy"],
        probability_base: 0.05,
        ..BASE
    },
    SignatureDef {
        id: "costochondritis",
        regions: &["sternum", "ribs_anterior"],
        quality: &["sharp", "stabbing"],
        aggravators: &["deep_breath", "coughing", "movement"],
        probability_base: 0.05,
        ..BASE
    },
    SignatureDef {
        id: "thoracic_facet_syndrome",
        regions: &["mid_back", "scapula_medial"],
        quality: &["sharp", "locked"],
        aggravators: &["rotation", "extension", "deep_breath"],
        probability_base: 0.1,
        ..BASE
    },
    // Lumbar spine and pelvis
    SignatureDef {
        id: "lumbar_disc_herniation",
        regions: &["low_back", "buttock", "leg", "foot", "calves"],
        quality: &["shooting", "sharp", "electric", "burning"],
        aggravators: &["sitting", "bending_forward", "coughing", "morning", "driving"],
        relievers: &["walking", "lying_prone", "standing"],
        probability_base: 0.2,
        ..BASE
    },
    SignatureDef {
        id: "lumbar_stenosis",
        regions: &["low_back", "legs_bilateral", "thighs"],
        quality: &["heaviness", "cramping", "numbness", "weakness"],
        aggravators: &["walking_distance", "standing", "bending_backward"],
        relievers: &["sitting", "bending_forward", "leaning_shopping_cart"],
        risk_factors: &["age_gt_60"],
        probability_base: 0.15,
        ..BASE
    },
    SignatureDef {
        id: "mechanical_low_back_pain",
        regions: &["low_back", "buttock"],
        quality: &["dull", "aching", "throbbing", "stiffness"],
        aggravators: &["prolonged_posture", "heavy_lifting", "fatigue"],
        relievers: &["movement", "heat", "rest", "changing_positions"],
        probability_base: 0.4,
        ..BASE
    },
    SignatureDef {
        id: "spondylolisthesis",
        regions: &["low_back"],
        quality: &["aching", "instability_feeling"],
        aggravators: &["extension", "standing_long_time"],
        risk_factors: &["adolescent_athlete", "gymnastics", "football"],
        probability_base: 0.05,
        ..BASE
    },
    SignatureDef {
        id: "sacroiliac_joint_dysfunction",
        regions: &["glute_medial", "low_back", "groin"],
        quality: &["sharp", "aching"],
        aggravators: &["single_leg_stance", "stairs", "turning_in_bed"],
        probability_base: 0.1,
        ..BASE
    },
    SignatureDef {
        id: "coccygodynia",
        regions: &["tailbone"],
        quality: &["sharp", "tenderness"],
        aggravators: &["sitting_hard_surface", "sit_to_stand"],
        probability_base: 0.02,
        ..BASE
    },
    // Hip and groin
    SignatureDef {
        id: "hip_osteoarthritis",
        regions: &["groin", "thigh_anterior", "hip_lateral"],
        quality: &["stiffness_morning", "ache"],
        aggravators: &["weight_bearing", "internal_rotation", "tie_shoes"],
        risk_factors: &["age_gt_50"],
        probability_base: 0.15,
        ..BASE
    },
    SignatureDef {
        id: "femoroacetabular_impingement",
        regions: &["groin", "hip_deep"],
        quality: &["pinching", "sharp"],
        aggravators: &["squatting", "sitting_low"],
        probability_base: 0.1,
        ..BASE
    },
    SignatureDef {
        id: "greater_trochanteric_pain_syndrome",
        regions: &["hip_lateral", "thigh_lateral"],
        quality: &["aching", "burning"],
        aggravators: &["lying_on_side", "walking", "stairs"],
        probability_base: 0.15,
        ..BASE
    },
    SignatureDef {
        id: "piriformis_syndrome",
        regions: &["buttock", "posterior_thigh"],
        quality: &["aching", "tingling"],
        aggravators: &["sitting", "wallet_in_pocket"],
        probability_base: 0.1,
        ..BASE
    },
    // Knee
    SignatureDef {
        id: "patellofemoral_pain_syndrome",
        regions: &["knee_anterior", "kneecap"],
        quality: &["aching", "grinding"],
        aggravators: &["stairs_down", "squatting", "sitting_prolonged"],
        probability_base: 0.2,
        ..BASE
    },
    SignatureDef {
        id: "knee_osteoarthritis",
        regions: &["knee_medial", "knee_diffuse"],
        quality: &["stiffness", "aching", "crepitus"],
        aggravators: &["walking", "weather_change", "morning"],
        risk_factors: &["age_gt_50", "obesity"],
        probability_base: 0.2,
        ..BASE
    },
    SignatureDef {
        id: "meniscal_tear",
        regions: &["knee_joint_line"],
        quality: &["sharp", "locking", "giving_way"],
        aggravators: &["twisting", "squatting"],
        probability_base: 0.1,
        ..BASE
    },
    SignatureDef {
        id: "iliotibial_band_syndrome",
        regions: &["knee_lateral", "thigh_lateral"],
        quality: &["sharp", "burning"],
        aggravators: &["running", "cycling"],
        probability_base: 0.1,
        ..BASE
    },
    SignatureDef {
        id: "patellar_tendinopathy",
        regions: &["knee_inferior_pole"],
        quality: &["sharp", "aching"],
        aggravators: &["jumping", "stairs", "squatting"],
        probability_base: 0.05,
        ..BASE
    },
    // Ankle and foot
    SignatureDef {
        id: "plantar_fasciitis",
        regions: &["heel", "arch", "sole"],
        quality: &["sharp_first_step", "throbbing", "stiffness"],
        aggravators: &["morning", "standing_long_duration", "barefoot"],
        probability_base: 0.2,
        ..BASE
    },
    SignatureDef {
        id: "achilles_tendinopathy",
        regions: &["heel_posterior", "calf_lower"],
        quality: &["stiffness_morning", "sharp", "thickening"],
        aggravators: &["running", "uphill"],
        probability_base: 0.1,
        ..BASE
    },
    SignatureDef {
        id: "inversion_sprain",
        regions: &["ankle_lateral"],
        quality: &["swelling", "throbbing", "sharp"],
        aggravators: &["weight_bearing", "inversion"],
        history_flag: Some("trauma_roll"),
        probability_base: 0.1,
        ..BASE
    },
    SignatureDef {
        id: "mortons_neuroma",
        regions: &["toes_3_4", "ball_of_foot"],
        quality: &["burning", "pebble_in_shoe", "electric"],
        aggravators: &["tight_shoes"],
        probability_base: 0.05,
        ..BASE
    },
];

fn tag_set(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

pub fn builtin() -> Vec<PathologySignature> {
    SIGNATURES
        .iter()
        .map(|def| PathologySignature {
            id: def.id.to_string(),
            regions: tag_set(def.regions),
            quality: tag_set(def.quality),
            aggravators: tag_set(def.aggravators),
            relievers: tag_set(def.relievers),
            risk_factors: tag_set(def.risk_factors),
            associated_signs: tag_set(def.associated_signs),
            red_flag: def.red_flag,
            history_flag: def.history_flag.map(str::to_string),
            probability_base: def.probability_base,
        })
        .collect()
}
