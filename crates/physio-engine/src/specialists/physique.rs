use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;

use super::{explicit_score, Domain, Specialist, NEUTRAL_SCORE};
use crate::error::SpecialistError;

pub struct PhysiqueSpecialist;

impl Specialist for PhysiqueSpecialist {
    fn domain(&self) -> Domain {
        Domain::Physique
    }

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        let height = positive(record, "height_cm")?;
        let weight = positive(record, "weight_kg")?;
        let bmi = height
            .zip(weight)
            .map(|(h, w)| w / (h / 100.0).powi(2))
            .map(|bmi| (bmi * 10.0).round() / 10.0);

        let score = match (explicit_score(record)?, bmi) {
            (Some(score), _) => score,
            (None, Some(bmi)) => bmi_score(bmi),
            (None, None) => NEUTRAL_SCORE,
        };

        let mut output = SpecialistOutput::new(score);
        if let Some(bmi) = bmi {
            output = output.with("bmi", bmi);
        }
        Ok(output)
    }
}

fn positive(record: &SubRecord, field: &str) -> Result<Option<f64>, SpecialistError> {
    match record.number(field)? {
        Some(value) if value <= 0.0 || !value.is_finite() => Err(SpecialistError::OutOfRange {
            field: field.to_string(),
            value,
        }),
        other => Ok(other),
    }
}

fn bmi_score(bmi: f64) -> f64 {
    if (18.5..25.0).contains(&bmi) {
        90.0
    } else if (25.0..30.0).contains(&bmi) {
        70.0
    } else {
        50.0
    }
}
