use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A serious condition and the findings that each, on their own, raise
/// suspicion of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RedFlagCriterion {
    pub condition_id: String,
    pub tags: BTreeSet<String>,
}

/// Do not treat, refer out.
const CRITERIA: &[(&str, &[&str])] = &[
    (
        "cauda_equina",
        &["saddle_anesthesia", "bladder_retention", "bowel_incontinence", "bilateral_leg_weakness"],
    ),
    ("fracture", &["trauma_history", "osteoporosis", "age_gt_70", "steroid_use"]),
    (
        "malignancy",
        &[
            "night_pain_unrelenting",
            "unexplained_weight_loss",
            "history_cancer",
            "systemic_illness",
            "night_sweats",
        ],
    ),
    ("infection", &["fever", "chills", "iv_drug_use", "recent_surgery", "redness_streaking"]),
    (
        "myocardial_infarction",
        &["chest_pressure", "jaw_pain", "left_arm_numbness", "shortness_of_breath"],
    ),
    ("dvt", &["calf_swelling", "calf_redness", "recent_flight", "calf_warmth"]),
];

/// Review-of-systems and red-flag question ids whose "yes" stands for a
/// differently named intake tag.
const ROS_ALIASES: &[(&str, &str)] = &[
    ("ros_fever", "fever"),
    ("ros_chills", "chills"),
    ("ros_weight", "unexplained_weight_loss"),
    ("ros_sweat", "night_sweats"),
    ("ros_malaise", "systemic_illness"),
    ("ros_night_pain", "night_pain_unrelenting"),
    ("ros_chest", "chest_pressure"),
    ("ros_jaw", "jaw_pain"),
    ("ros_sob", "shortness_of_breath"),
    ("ros_arm_numb", "left_arm_numbness"),
    ("ros_redness", "redness_streaking"),
    ("rf_saddle", "saddle_anesthesia"),
    ("rf_bladder", "bladder_retention"),
    ("rf_bowel", "bowel_incontinence"),
    ("rf_bilateral_weakness", "bilateral_leg_weakness"),
    ("rf_calf_swelling", "calf_swelling"),
    ("rf_calf_redness", "calf_redness"),
    ("rf_calf_warmth", "calf_warmth"),
    ("rf_flight", "recent_flight"),
];

/// Every tag an intake can carry into the red-flag scan: pain red-flag
/// symptoms, resolved review-of-systems answers, history flags and
/// profile-derived tags.
const INTAKE_TAGS: &[&str] = &[
    // neurological
    "saddle_anesthesia",
    "bladder_retention",
    "bowel_incontinence",
    "bilateral_leg_weakness",
    "numbness",
    "focal_weakness",
    "blurred_vision",
    // constitutional
    "fever",
    "chills",
    "unexplained_weight_loss",
    "night_sweats",
    "night_pain_unrelenting",
    "systemic_illness",
    "redness_streaking",
    // cardiopulmonary
    "chest_pressure",
    "jaw_pain",
    "left_arm_numbness",
    "shortness_of_breath",
    // vascular
    "calf_swelling",
    "calf_redness",
    "calf_warmth",
    "recent_flight",
    // history
    "trauma_history",
    "trauma_mva",
    "trauma_roll",
    "osteoporosis",
    "steroid_use",
    "history_cancer",
    "iv_drug_use",
    "recent_surgery",
    // profile
    "age_gt_40",
    "age_gt_50",
    "age_gt_60",
    "age_gt_70",
];

pub fn builtin() -> Vec<RedFlagCriterion> {
    CRITERIA
        .iter()
        .map(|(condition, tags)| RedFlagCriterion {
            condition_id: condition.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

pub fn builtin_ros_aliases() -> Vec<(String, String)> {
    ROS_ALIASES
        .iter()
        .map(|(id, tag)| (id.to_string(), tag.to_string()))
        .collect()
}

pub fn builtin_intake_tags() -> Vec<String> {
    INTAKE_TAGS.iter().map(|t| t.to_string()).collect()
}
