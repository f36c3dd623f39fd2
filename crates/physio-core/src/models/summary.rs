use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::consult::SoapNote;
use super::quality::ReliabilityReport;

/// The final, patient-facing assessment summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Summary {
    pub diagnosis: String,
    pub severity: String,
    pub red_flags: Vec<String>,
    pub scores: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_control: Option<ReliabilityReport>,
    pub soap: SoapNote,
    pub explanation: String,
    pub is_ai: bool,
    pub generated_at: jiff::Timestamp,
}

/// Structured output expected back from the report writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WrittenReport {
    pub diagnosis_title: String,
    pub soap: SoapNote,
    pub explanation_for_patient: String,
}
