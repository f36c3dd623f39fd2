use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;

use super::{explicit_score, Domain, Specialist, NEUTRAL_SCORE};
use crate::error::SpecialistError;

pub struct StrengthSpecialist;

impl Specialist for StrengthSpecialist {
    fn domain(&self) -> Domain {
        Domain::Strength
    }

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        let score = explicit_score(record)?.unwrap_or(NEUTRAL_SCORE);
        Ok(SpecialistOutput::new(score).with("training_priority", training_priority(score)))
    }
}

fn training_priority(score: f64) -> &'static str {
    if score < 40.0 {
        "Foundational Strength"
    } else if score < 70.0 {
        "Hypertrophy & Motor Control"
    } else {
        "Performance & Power"
    }
}
