use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;

use super::{explicit_score, Domain, Specialist, NEUTRAL_SCORE};
use crate::error::SpecialistError;

pub struct NutritionSpecialist;

impl Specialist for NutritionSpecialist {
    fn domain(&self) -> Domain {
        Domain::Nutrition
    }

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        let mut score = explicit_score(record)?.unwrap_or(NEUTRAL_SCORE);
        let mut recommendations = Vec::new();

        if record.answer("bloating").is_yes() {
            score -= 10.0;
            recommendations.push("Gut health review");
        }
        if score < 50.0 {
            recommendations.push("Whole-food protein with every meal");
        }

        Ok(SpecialistOutput::new(score).with("recommendations", recommendations))
    }
}
