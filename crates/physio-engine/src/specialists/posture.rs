use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;

use super::{explicit_score, Domain, Specialist};
use crate::error::SpecialistError;

/// `(answer key, syndrome name)`.
const SYNDROMES: &[(&str, &str)] = &[
    ("forward_head", "Forward Head Posture"),
    ("rounded_shoulders", "Upper Crossed Syndrome"),
    ("anterior_pelvic_tilt", "Lower Crossed Syndrome"),
    ("flat_back", "Flat Back"),
    ("sway_back", "Sway Back"),
];

const PENALTY_PER_SYNDROME: f64 = 15.0;

pub struct PostureSpecialist;

impl Specialist for PostureSpecialist {
    fn domain(&self) -> Domain {
        Domain::Posture
    }

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        let mut syndromes: Vec<String> = SYNDROMES
            .iter()
            .filter(|(key, _)| record.answer(key).is_yes())
            .map(|(_, name)| name.to_string())
            .collect();
        for extra in record.tags("syndromes")? {
            if !syndromes.contains(&extra) {
                syndromes.push(extra);
            }
        }

        let score = match explicit_score(record)? {
            Some(score) => score,
            None => 100.0 - PENALTY_PER_SYNDROME * syndromes.len() as f64,
        };

        Ok(SpecialistOutput::new(score).with("syndromes", syndromes))
    }
}
