use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;

use super::{bounded, explicit_score, Domain, Specialist, NEUTRAL_SCORE};
use crate::error::SpecialistError;

pub struct MobilitySpecialist;

impl Specialist for MobilitySpecialist {
    fn domain(&self) -> Domain {
        Domain::Mobility
    }

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        // A 0-10 self-rated limitation inverts onto the 0-100 scale.
        let score = match explicit_score(record)? {
            Some(score) => score,
            None => bounded(record, "limitation", 0.0, 10.0)?
                .map(|limitation| (10.0 - limitation) * 10.0)
                .unwrap_or(NEUTRAL_SCORE),
        };

        Ok(SpecialistOutput::new(score).with("injury_risk", injury_risk(score)))
    }
}

fn injury_risk(score: f64) -> &'static str {
    if score < 40.0 {
        "high"
    } else if score < 70.0 {
        "moderate"
    } else {
        "low"
    }
}
