use physio_core::models::consult::Prognosis;
use physio_core::models::intake::{Profile, Severity};

/// Connective-tissue healing category a diagnosis falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TissueCategory {
    NerveRoot,
    TendonLigament,
    JointDegenerative,
    AcuteSoftTissue,
    NonSpecificMechanical,
}

/// Checked in order; the first family with a keyword in the id wins.
const KEYWORD_FAMILIES: &[(TissueCategory, &[&str])] = &[
    (
        TissueCategory::NerveRoot,
        &[
            "radiculopathy",
            "myelopathy",
            "herniation",
            "disc",
            "sciatica",
            "neuroma",
            "carpal_tunnel",
            "thoracic_outlet",
            "piriformis",
        ],
    ),
    (
        TissueCategory::TendonLigament,
        &[
            "tendinopathy",
            "tendinitis",
            "tenosynovitis",
            "epicondyl",
            "fasciitis",
            "iliotibial",
            "trochanteric",
            "tear",
        ],
    ),
    (
        TissueCategory::JointDegenerative,
        &[
            "osteoarthritis",
            "stenosis",
            "spondylolisthesis",
            "capsulitis",
            "facet",
            "impingement",
            "sacroiliac",
        ],
    ),
    (
        TissueCategory::AcuteSoftTissue,
        &["sprain", "strain", "whiplash", "torticollis", "costochondritis", "spasm", "contusion"],
    ),
];

/// Share added to `weeks_max` past [`AGE_THRESHOLD`].
const AGE_EXTENSION: f64 = 0.2;
const AGE_THRESHOLD: u32 = 50;

impl TissueCategory {
    pub fn classify(diagnosis_id: &str) -> Self {
        let id = diagnosis_id.to_lowercase();
        KEYWORD_FAMILIES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| id.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(Self::NonSpecificMechanical)
    }

    /// Baseline `(weeks_min, weeks_max)` for a moderate presentation.
    pub fn baseline_weeks(&self) -> (f64, f64) {
        match self {
            Self::NerveRoot => (6.0, 12.0),
            Self::TendonLigament => (8.0, 16.0),
            Self::JointDegenerative => (12.0, 26.0),
            Self::AcuteSoftTissue => (2.0, 6.0),
            Self::NonSpecificMechanical => (4.0, 8.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NerveRoot => "nerve_root",
            Self::TendonLigament => "tendon_ligament",
            Self::JointDegenerative => "joint_degenerative",
            Self::AcuteSoftTissue => "acute_soft_tissue",
            Self::NonSpecificMechanical => "non_specific_mechanical",
        }
    }
}

fn severity_multiplier(severity: Severity) -> f64 {
    match severity {
        Severity::Mild => 0.75,
        Severity::Moderate => 1.0,
        Severity::Severe => 1.5,
    }
}

/// Estimates a recovery window from diagnosis, severity and profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoveryTrajectoryEngine;

impl RecoveryTrajectoryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Unknown ids fall back to the non-specific mechanical baseline.
    /// Always `1 <= weeks_min <= weeks_max`.
    pub fn predict(&self, diagnosis_id: &str, severity: Severity, profile: &Profile) -> Prognosis {
        let category = TissueCategory::classify(diagnosis_id);
        let (base_min, base_max) = category.baseline_weeks();
        let multiplier = severity_multiplier(severity);

        let mut max = base_max * multiplier;
        if profile.age.is_some_and(|age| age > AGE_THRESHOLD) {
            max *= 1.0 + AGE_EXTENSION;
        }

        let weeks_min = ((base_min * multiplier).round() as u32).max(1);
        // Absorb float noise so 10.000000000000002 stays 10 weeks.
        let weeks_max = ((max - 1e-9).ceil() as u32).max(weeks_min);

        tracing::debug!(
            diagnosis = diagnosis_id,
            category = category.as_str(),
            severity = severity.as_str(),
            weeks_min,
            weeks_max,
            "recovery predicted"
        );

        Prognosis {
            weeks_min,
            weeks_max,
        }
    }
}
