use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;

use super::{affirmed, bounded, Domain, Specialist};
use crate::error::SpecialistError;

/// Screening answers that each add one point of allostatic load.
const YELLOW_FLAGS: &[&str] = &[
    "fear_movement",
    "malaise",
    "depression_screen",
    "anxiety_screen",
    "irritability",
    "social_withdrawal",
    "isolation",
];

/// Biopsychosocial load from the `social` and `stress` sections.
///
/// `allostatic_load = min(10, stress_level + yellow flags)`, and the score
/// falls 10 points per unit of load.
pub struct PsychosocialSpecialist;

impl Specialist for PsychosocialSpecialist {
    fn domain(&self) -> Domain {
        Domain::Psychosocial
    }

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        let stress = bounded(record, "stress_level", 0.0, 10.0)?.unwrap_or(0.0);
        let flags = affirmed(record, YELLOW_FLAGS);

        let load = (stress + flags.len() as f64).round().min(10.0);

        Ok(SpecialistOutput::new(100.0 - load * 10.0)
            .with("allostatic_load", load)
            .with("yellow_flags", flags))
    }
}
