use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::Answer;

/// One answered question, as recorded by the session front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    pub id: String,
    pub answer: serde_json::Value,
    /// Question wording shown to the patient, if the front end sent it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl HistoryEntry {
    pub fn new(id: impl Into<String>, answer: impl Into<serde_json::Value>) -> Self {
        Self {
            id: id.into(),
            answer: answer.into(),
            text: None,
        }
    }

    /// The answer as display text. Lists are joined with `", "`.
    pub fn answer_text(&self) -> String {
        match &self.answer {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.trim().to_string(),
            serde_json::Value::Bool(b) => if *b { "yes" } else { "no" }.to_string(),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s.trim().to_string(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        }
    }

    pub fn as_answer(&self) -> Answer {
        Answer::from_value(&self.answer)
    }

    /// True when the patient gave no usable answer.
    pub fn is_blank(&self) -> bool {
        self.answer_text().is_empty()
    }
}
