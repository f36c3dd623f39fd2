use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;
use physio_core::tags::normalize_tag;

use super::{explicit_score, Domain, Specialist, NEUTRAL_SCORE};
use crate::error::SpecialistError;

const PENALTY_PER_RISK_FACTOR: f64 = 10.0;

pub struct CardioSpecialist;

impl Specialist for CardioSpecialist {
    fn domain(&self) -> Domain {
        Domain::Cardio
    }

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        let mut risk_factors: Vec<String> = Vec::new();
        for factor in record.tags("risk_factors")? {
            let factor = normalize_tag(&factor);
            if !factor.is_empty() && !risk_factors.contains(&factor) {
                risk_factors.push(factor);
            }
        }

        let base = match explicit_score(record)? {
            Some(score) => score,
            None if risk_factors.is_empty() => NEUTRAL_SCORE,
            None => 100.0,
        };
        let score = base - PENALTY_PER_RISK_FACTOR * risk_factors.len() as f64;

        Ok(SpecialistOutput::new(score).with("risk_factors", risk_factors))
    }
}
