use std::sync::Arc;

use physio_core::models::consult::SpecialistOutput;
use physio_core::models::intake::SubRecord;
use physio_core::tags::normalize_tag;
use physio_knowledge::KnowledgeBase;

use super::{bounded, Domain, Specialist};
use crate::error::SpecialistError;

/// Descriptors that point at a neural rather than a tissue source.
const NEUROPATHIC_DESCRIPTORS: &[&str] = &[
    "shooting",
    "electric",
    "burning",
    "tingling",
    "numbness",
    "pins_and_needles",
];

/// Classifies pain type and maps reported locations onto dermatomes.
pub struct PainSpecialist {
    kb: Arc<KnowledgeBase>,
}

impl PainSpecialist {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }
}

impl Specialist for PainSpecialist {
    fn domain(&self) -> Domain {
        Domain::Pain
    }

    /// `score = 100 - 10 × pain_level`.
    fn analyze(&self, record: &SubRecord) -> Result<SpecialistOutput, SpecialistError> {
        let level = bounded(record, "pain_level", 0.0, 10.0)?.unwrap_or(0.0);

        let quality: Vec<String> = record
            .tags("quality")?
            .iter()
            .map(|q| normalize_tag(q))
            .collect();
        let pain_type = if quality.is_empty() {
            "unspecified"
        } else if quality
            .iter()
            .any(|q| NEUROPATHIC_DESCRIPTORS.contains(&q.as_str()))
        {
            "neuropathic"
        } else {
            "nociceptive"
        };

        let mut dermatomes: Vec<String> = Vec::new();
        for location in record.tags("locations")? {
            if let Some(root) = self.kb.dermatome_for(&location)
                && !dermatomes.iter().any(|d| d == root)
            {
                dermatomes.push(root.to_string());
            }
        }

        Ok(SpecialistOutput::new(100.0 - level * 10.0)
            .with("type", pain_type)
            .with("pain_level", level)
            .with("dermatomes", dermatomes))
    }
}
