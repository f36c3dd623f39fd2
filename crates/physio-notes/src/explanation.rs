use serde::Serialize;

use crate::error::NoteError;
use crate::render::render_template;

const EXPLANATION: &str = "Based on the clinical presentation, the primary hypothesis is \
{{ diagnosis }}. This is consistent with a {{ severity | lower }} presentation.\
{% if red_flags %} Some of your answers point to {{ red_flags | join(sep=\", \") }}, \
which needs a medical review before any treatment starts.{% endif %} \
Recovery is estimated at {{ weeks_min }}-{{ weeks_max }} weeks with adherence to the plan.";

/// Inputs of the plain-language patient explanation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExplanationContext {
    /// Human-readable diagnosis, e.g. `"lumbar disc herniation"`.
    pub diagnosis: String,
    pub severity: String,
    /// Human-readable condition names.
    pub red_flags: Vec<String>,
    pub weeks_min: u32,
    pub weeks_max: u32,
}

pub fn compose_explanation(context: &ExplanationContext) -> Result<String, NoteError> {
    render_template("explanation", EXPLANATION, context)
}
