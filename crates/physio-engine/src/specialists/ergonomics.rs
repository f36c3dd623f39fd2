use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;

use super::{bounded, explicit_score, Domain, Specialist, NEUTRAL_SCORE};
use crate::error::SpecialistError;

/// Workstation exposure: self-rated risk, screen hours, eye strain.
pub struct ErgonomicsSpecialist;

impl Specialist for ErgonomicsSpecialist {
    fn domain(&self) -> Domain {
        Domain::Ergonomics
    }

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        let mut score = explicit_score(record)?.unwrap_or(NEUTRAL_SCORE);
        let mut recommendations = Vec::new();

        if record.answer("eye_strain").is_yes() {
            score -= 10.0;
            recommendations.push("20-20-20 screen breaks");
        }
        if bounded(record, "screen_hours", 0.0, 24.0)?.is_some_and(|h| h > 6.0) {
            score -= 10.0;
            recommendations.push("Hourly movement breaks");
        }
        if score < 50.0 {
            recommendations.push("Workstation assessment");
        }

        Ok(SpecialistOutput::new(score).with("recommendations", recommendations))
    }
}
