use physio_bedrock::ReportWriter;
use physio_core::models::consult::ConsultResult;
use physio_core::models::history::HistoryEntry;
use physio_core::models::quality::ReliabilityReport;
use physio_core::models::summary::Summary;
use physio_notes::explanation::{compose_explanation, ExplanationContext};

/// Pain scores below this read as a severe presentation.
const SEVERE_PAIN_SCORE: f64 = 50.0;

/// Build the final summary for a consult.
///
/// With a `writer`, its report supplies the title, note and explanation;
/// if it returns `None` the rule-based summary is used instead. Red flags
/// and scores always come from the consult.
pub async fn assemble_summary(
    consult: &ConsultResult,
    history: &[HistoryEntry],
    quality: ReliabilityReport,
    writer: Option<&dyn ReportWriter>,
) -> Summary {
    let severity = severity_label(consult);
    let red_flags: Vec<String> = consult
        .safety
        .flags
        .iter()
        .map(|f| format!("{} Risk", f.condition_id.to_uppercase()))
        .collect();

    if let Some(writer) = writer
        && let Some(report) = writer.write_report(history, consult).await
    {
        tracing::info!(red_flags = red_flags.len(), "AI summary assembled");
        return Summary {
            diagnosis: report.diagnosis_title,
            severity: severity.to_string(),
            red_flags,
            scores: consult.scores.clone(),
            quality_control: None,
            soap: report.soap,
            explanation: report.explanation_for_patient,
            is_ai: true,
            generated_at: jiff::Timestamp::now(),
        };
    }

    let primary = consult.diagnosis.primary.replace('_', " ");
    let context = ExplanationContext {
        diagnosis: primary.clone(),
        severity: severity.to_string(),
        red_flags: consult
            .safety
            .flags
            .iter()
            .map(|f| f.condition_id.replace('_', " "))
            .collect(),
        weeks_min: consult.prognosis.weeks_min,
        weeks_max: consult.prognosis.weeks_max,
    };
    let explanation = compose_explanation(&context).unwrap_or_else(|e| {
        tracing::error!(error = %e, "explanation rendering failed");
        format!(
            "The primary hypothesis is {primary}. Recovery is estimated at {}-{} weeks.",
            context.weeks_min, context.weeks_max
        )
    });

    tracing::info!(red_flags = red_flags.len(), "rule-based summary assembled");
    Summary {
        diagnosis: primary.to_uppercase(),
        severity: severity.to_string(),
        red_flags,
        scores: consult.scores.clone(),
        quality_control: Some(quality),
        soap: consult.soap_report.clone(),
        explanation,
        is_ai: false,
        generated_at: jiff::Timestamp::now(),
    }
}

fn severity_label(consult: &ConsultResult) -> &'static str {
    match consult.module("pain") {
        Some(pain) if pain.score < SEVERE_PAIN_SCORE => "Severe",
        _ => "Moderate",
    }
}
