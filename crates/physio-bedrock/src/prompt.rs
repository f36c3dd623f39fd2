//! Prompt assembly and response parsing for the report writer.
//!
//! The model sees the raw answer history and the engine's findings as two
//! XML-style blocks, and must answer with a single JSON object matching
//! [`WrittenReport`].

use physio_core::models::consult::ConsultResult;
use physio_core::models::history::HistoryEntry;
use physio_core::models::summary::WrittenReport;
use serde::Serialize;

use crate::error::BedrockError;

pub const SYSTEM_PROMPT: &str = "\
You are a senior musculoskeletal physiotherapist writing up an intake assessment. \
You receive the patient's raw questionnaire answers and the findings of a rule-based \
triage engine. Treat every red flag listed by the engine as confirmed and mention it. \
Do not invent findings that are absent from the input.

Respond with one JSON object and nothing else, using exactly these keys:
{\"diagnosis_title\": string, \
\"soap\": {\"S\": string, \"O\": string, \"A\": string, \"P\": string}, \
\"explanation_for_patient\": string}";

/// Engine findings passed to the model. Module internals are left out.
#[derive(Serialize)]
struct Findings<'a> {
    primary_diagnosis: &'a str,
    candidates: Vec<(&'a str, f64)>,
    red_flags: Vec<&'a str>,
    prognosis_weeks: (u32, u32),
    scores: &'a std::collections::BTreeMap<String, f64>,
    draft_note: &'a physio_core::models::consult::SoapNote,
}

/// Build the user message: answer history followed by engine findings.
pub fn build_user_message(
    history: &[HistoryEntry],
    consult: &ConsultResult,
) -> Result<String, BedrockError> {
    let mut message = String::from("<intake_history>\n");
    for entry in history {
        let question = entry.text.as_deref().unwrap_or(&entry.id);
        message.push_str(&format!("- {question}: {}\n", entry.answer_text()));
    }
    message.push_str("</intake_history>\n");

    let findings = Findings {
        primary_diagnosis: &consult.diagnosis.primary,
        candidates: consult
            .diagnosis
            .top_candidates
            .iter()
            .map(|c| (c.pathology_id.as_str(), c.score))
            .collect(),
        red_flags: consult
            .safety
            .flags
            .iter()
            .map(|f| f.condition_id.as_str())
            .collect(),
        prognosis_weeks: (consult.prognosis.weeks_min, consult.prognosis.weeks_max),
        scores: &consult.scores,
        draft_note: &consult.soap_report,
    };
    message.push_str("<engine_findings>\n");
    message.push_str(&serde_json::to_string_pretty(&findings)?);
    message.push_str("\n</engine_findings>");

    Ok(message)
}

/// Parse the model's answer into a [`WrittenReport`].
///
/// Tolerates Markdown code fences and prose around the JSON object. An
/// empty title or patient explanation is a schema violation.
pub fn parse_report(response: &str) -> Result<WrittenReport, BedrockError> {
    let json = extract_json_object(response)
        .ok_or_else(|| BedrockError::ResponseParse("no JSON object in response".to_string()))?;

    let report: WrittenReport = serde_json::from_str(json).map_err(|e| {
        BedrockError::SchemaViolation(format!("failed to parse WrittenReport: {e}"))
    })?;

    if report.diagnosis_title.trim().is_empty() {
        return Err(BedrockError::SchemaViolation("empty diagnosis_title".to_string()));
    }
    if report.explanation_for_patient.trim().is_empty() {
        return Err(BedrockError::SchemaViolation(
            "empty explanation_for_patient".to_string(),
        ));
    }
    Ok(report)
}

/// The span from the first `{` to the last `}`.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
