use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One ranked differential-diagnosis candidate.
///
/// `score` is a non-negative match strength, not a probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisCandidate {
    pub pathology_id: String,
    pub score: f64,
}

/// A red-flag condition whose criteria were met by the intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SafetyFlag {
    pub condition_id: String,
    pub matched_tags: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SafetyReport {
    pub flags: Vec<SafetyFlag>,
}

impl SafetyReport {
    pub fn is_clear(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn has(&self, condition_id: &str) -> bool {
        self.flags.iter().any(|f| f.condition_id == condition_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisSummary {
    pub top_candidates: Vec<DiagnosisCandidate>,
    pub primary: String,
}

/// Estimated recovery window in weeks. `1 <= weeks_min <= weeks_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prognosis {
    pub weeks_min: u32,
    pub weeks_max: u32,
}

/// Output of one domain specialist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpecialistOutput {
    /// 0–100, higher is healthier.
    pub score: f64,
    /// Domain-specific fields (pain type, posture syndromes, ...).
    #[serde(default)]
    pub findings: BTreeMap<String, serde_json::Value>,
    /// Set when the scorer failed and `score` is the neutral fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl SpecialistOutput {
    pub fn new(score: f64) -> Self {
        Self {
            score: score.clamp(0.0, 100.0),
            findings: BTreeMap::new(),
            failure: None,
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.findings.insert(key.to_string(), value.into());
        self
    }

    pub fn finding_str(&self, key: &str) -> Option<&str> {
        self.findings.get(key).and_then(|v| v.as_str())
    }

    pub fn finding_f64(&self, key: &str) -> Option<f64> {
        self.findings.get(key).and_then(|v| v.as_f64())
    }

    /// String-list finding; non-string entries are skipped.
    pub fn finding_list(&self, key: &str) -> Vec<String> {
        self.findings
            .get(key)
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// The four-part clinical note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoapNote {
    #[serde(rename = "S")]
    pub subjective: String,
    #[serde(rename = "O")]
    pub objective: String,
    #[serde(rename = "A")]
    pub assessment: String,
    #[serde(rename = "P")]
    pub plan: String,
}

/// Everything one `consult` call produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsultResult {
    pub safety: SafetyReport,
    pub diagnosis: DiagnosisSummary,
    pub prognosis: Prognosis,
    pub modules: BTreeMap<String, SpecialistOutput>,
    pub scores: BTreeMap<String, f64>,
    pub soap_report: SoapNote,
}

impl ConsultResult {
    pub fn module(&self, domain: &str) -> Option<&SpecialistOutput> {
        self.modules.get(domain)
    }
}
