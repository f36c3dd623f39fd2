use serde::Serialize;

use physio_core::models::summary::Summary;

use crate::error::NoteError;
use crate::render::render_template;

const SUMMARY_MARKDOWN: &str = r#"# Assessment Summary

**Diagnosis:** {{ diagnosis }}
**Severity:** {{ severity }}
**Source:** {% if is_ai %}AI-assisted report{% else %}Rule-based report{% endif %}
{% if red_flags %}
## Red Flags

{% for flag in red_flags %}- {{ flag }}
{% endfor %}{% endif %}
## Scores

{% for line in scores %}- {{ line.label }}: {{ line.score }}/100
{% endfor %}
## Clinical Note

- **S:** {{ soap.S }}
- **O:** {{ soap.O }}
- **A:** {{ soap.A }}
- **P:** {{ soap.P }}

## Explanation

{{ explanation }}
{% if quality %}
## Answer Reliability

Score {{ quality.score }}/100 ({% if quality.reliable %}reliable{% else %}unreliable{% endif %})
{% for warning in quality.warnings %}- {{ warning }}
{% endfor %}{% endif %}
Generated {{ generated_at }}
"#;

#[derive(Serialize)]
struct ScoreLine<'a> {
    label: &'a str,
    score: i64,
}

#[derive(Serialize)]
struct QualityView<'a> {
    score: i64,
    reliable: bool,
    warnings: &'a [String],
}

#[derive(Serialize)]
struct SummaryView<'a> {
    diagnosis: &'a str,
    severity: &'a str,
    is_ai: bool,
    red_flags: &'a [String],
    scores: Vec<ScoreLine<'a>>,
    soap: &'a physio_core::models::consult::SoapNote,
    explanation: &'a str,
    quality: Option<QualityView<'a>>,
    generated_at: String,
}

/// Render a final summary as a Markdown document.
pub fn render_summary_markdown(summary: &Summary) -> Result<String, NoteError> {
    let view = SummaryView {
        diagnosis: &summary.diagnosis,
        severity: &summary.severity,
        is_ai: summary.is_ai,
        red_flags: &summary.red_flags,
        scores: summary
            .scores
            .iter()
            .map(|(label, score)| ScoreLine {
                label,
                score: score.round() as i64,
            })
            .collect(),
        soap: &summary.soap,
        explanation: &summary.explanation,
        quality: summary.quality_control.as_ref().map(|q| QualityView {
            score: q.score.round() as i64,
            reliable: q.is_reliable,
            warnings: &q.warnings,
        }),
        generated_at: summary.generated_at.to_string(),
    };
    render_template("summary.md", SUMMARY_MARKDOWN, &view)
}
