use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;

use super::{explicit_score, Domain, Specialist};
use crate::error::SpecialistError;

const PENALTY_PER_CONDITION: f64 = 10.0;

/// Scores the burden of prior conditions and events.
///
/// Every key answered yes counts as one condition, as does every entry of a
/// `flags` list.
pub struct HistorySpecialist;

impl Specialist for HistorySpecialist {
    fn domain(&self) -> Domain {
        Domain::History
    }

    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        let mut conditions: Vec<String> = record
            .affirmed_keys()
            .into_iter()
            .map(str::to_string)
            .collect();
        for flag in record.tags("flags")? {
            if !conditions.contains(&flag) {
                conditions.push(flag);
            }
        }

        let score = match explicit_score(record)? {
            Some(score) => score,
            None => 100.0 - PENALTY_PER_CONDITION * conditions.len() as f64,
        };

        Ok(SpecialistOutput::new(score).with("conditions", conditions))
    }
}
