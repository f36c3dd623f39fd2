use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;
use physio_core::tags::normalize_tag;

use super::{bounded, explicit_score, Domain, Specialist, NEUTRAL_SCORE};
use crate::error::SpecialistError;

/// Scores sleep duration and regularity and proposes hygiene measures.
pub struct SleepSpecialist;

impl Specialist for SleepSpecialist {
    fn domain(&self) -> Domain {
        Domain::Sleep
    }

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        let hours = bounded(record, "hours", 0.0, 24.0)?;
        let irregular = record
            .text("consistency")
            .map(|c| matches!(normalize_tag(c).as_str(), "poor" | "irregular" | "bad"))
            .unwrap_or(false);

        let score = match (explicit_score(record)?, hours) {
            (Some(score), _) => score,
            (None, Some(hours)) => duration_score(hours) - if irregular { 10.0 } else { 0.0 },
            (None, None) => NEUTRAL_SCORE,
        };

        let mut protocol = Vec::new();
        if hours.is_some_and(|h| h < 7.0) {
            protocol.push("Extend sleep window to 7-9 hours");
        }
        if irregular {
            protocol.push("Fixed wake time");
        }
        if score < 60.0 {
            protocol.push("Screen-free hour before bed");
        }

        let mut output = SpecialistOutput::new(score).with("hygiene_protocol", protocol);
        if let Some(hours) = hours {
            output = output.with("hours", hours);
        }
        Ok(output)
    }
}

fn duration_score(hours: f64) -> f64 {
    if (7.0..=9.0).contains(&hours) {
        90.0
    } else if (6.0..=10.0).contains(&hours) {
        70.0
    } else {
        40.0
    }
}
