pub mod cardio;
pub mod ergonomics;
pub mod history;
pub mod mobility;
pub mod nutrition;
pub mod pain;
pub mod physique;
pub mod posture;
pub mod psychosocial;
pub mod sleep;
pub mod strength;

use std::sync::Arc;

use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::{Intake, SubRecord};
use physio_knowledge::KnowledgeBase;
use serde_json::json;

use crate::error::SpecialistError;

/// Score given to a domain with no usable data, or whose scorer failed.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// The eleven assessment domains, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Domain {
    Pain,
    Mobility,
    Posture,
    Sleep,
    Psychosocial,
    Cardio,
    Strength,
    Nutrition,
    History,
    Ergonomics,
    Physique,
}

impl Domain {
    pub const ALL: [Domain; 11] = [
        Domain::Pain,
        Domain::Mobility,
        Domain::Posture,
        Domain::Sleep,
        Domain::Psychosocial,
        Domain::Cardio,
        Domain::Strength,
        Domain::Nutrition,
        Domain::History,
        Domain::Ergonomics,
        Domain::Physique,
    ];

    /// Key in `ConsultResult::modules`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Pain => "pain",
            Self::Mobility => "mobility",
            Self::Posture => "posture",
            Self::Sleep => "sleep",
            Self::Psychosocial => "psychosocial",
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Nutrition => "nutrition",
            Self::History => "history",
            Self::Ergonomics => "ergo",
            Self::Physique => "physique",
        }
    }

    /// Key in `ConsultResult::scores`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pain => "Pain",
            Self::Mobility => "Mobility",
            Self::Posture => "Posture",
            Self::Sleep => "Sleep",
            Self::Psychosocial => "Stress",
            Self::Cardio => "Cardio",
            Self::Strength => "Strength",
            Self::Nutrition => "Nutrition",
            Self::History => "History",
            Self::Ergonomics => "Ergo",
            Self::Physique => "Physique",
        }
    }

    /// The slice of the intake this domain's scorer reads.
    ///
    /// The psychosocial scorer sees `social` and `stress` merged, with
    /// `stress` winning on shared keys.
    pub fn sub_record(&self, intake: &Intake) -> SubRecord {
        match self {
            Self::Pain => {
                let pain = &intake.pain;
                SubRecord::from(json!({
                    "locations": pain.locations,
                    "quality": pain.quality,
                    "aggravators": pain.aggravators,
                    "relievers": pain.relievers,
                    "pain_level": pain.pain_level,
                }))
            }
            Self::Mobility => intake.mobility.clone(),
            Self::Posture => intake.posture.clone(),
            Self::Sleep => intake.sleep.clone(),
            Self::Psychosocial => intake.social.merged(&intake.stress),
            Self::Cardio => intake.cardio.clone(),
            Self::Strength => intake.strength.clone(),
            Self::Nutrition => intake.nutrition.clone(),
            Self::History => intake.history.clone(),
            Self::Ergonomics => intake.ergo.clone(),
            Self::Physique => intake.physique.clone(),
        }
    }
}

/// A per-domain scorer.
///
/// Must accept an empty record and return a score in `[0, 100]`, higher
/// meaning healthier. Returning an error never aborts a consult: the doctor
/// records the failure and substitutes [`NEUTRAL_SCORE`].
pub trait Specialist: Send + Sync {
    fn domain(&self) -> Domain;

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError>;
}

/// The default scorer for every domain, in [`Domain::ALL`] order.
pub fn all_specialists(kb: Arc<KnowledgeBase>) -> Vec<Box<dyn Specialist>> {
    vec![
        Box::new(pain::PainSpecialist::new(kb)),
        Box::new(mobility::MobilitySpecialist),
        Box::new(posture::PostureSpecialist),
        Box::new(sleep::SleepSpecialist),
        Box::new(psychosocial::PsychosocialSpecialist),
        Box::new(cardio::CardioSpecialist),
        Box::new(strength::StrengthSpecialist),
        Box::new(nutrition::NutritionSpecialist),
        Box::new(history::HistorySpecialist),
        Box::new(ergonomics::ErgonomicsSpecialist),
        Box::new(physique::PhysiqueSpecialist),
    ]
}

/// A pre-computed `score` field, if the intake mapper supplied one.
pub(crate) fn explicit_score(record: &SubRecord) -> Result<Option<f64>, SpecialistError> {
    bounded(record, "score", 0.0, 100.0)
}

/// Numeric field that must fall within `[min, max]` when present.
pub(crate) fn bounded(
    record: &SubRecord,
    field: &str,
    min: f64,
    max: f64,
) -> Result<Option<f64>, SpecialistError> {
    match record.number(field)? {
        Some(value) if !(min..=max).contains(&value) => Err(SpecialistError::OutOfRange {
            field: field.to_string(),
            value,
        }),
        other => Ok(other),
    }
}

/// Keys from `candidates` the record answers yes to, in `candidates` order.
pub(crate) fn affirmed<'a>(record: &SubRecord, candidates: &[&'a str]) -> Vec<&'a str> {
    candidates
        .iter()
        .copied()
        .filter(|key| record.answer(key).is_yes())
        .collect()
}
