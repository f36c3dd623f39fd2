use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Answer-reliability verdict produced by the quality-control collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReliabilityReport {
    pub score: f64,
    pub is_reliable: bool,
    pub warnings: Vec<String>,
    pub flags: Vec<String>,
}

impl Default for ReliabilityReport {
    fn default() -> Self {
        Self {
            score: 100.0,
            is_reliable: true,
            warnings: Vec::new(),
            flags: Vec::new(),
        }
    }
}
