use serde::Serialize;

use physio_core::models::consult::SoapNote;

use crate::error::NoteError;
use crate::render::render_all;

const SUBJECTIVE: &str = "Patient reports {{ pain_type }} pain (Level {{ pain_level }}/10). \
Psychosocial load: {{ allostatic_load }}/10.";

const OBJECTIVE: &str = "Functional Movement Score: {{ mobility_score }}/100. \
Posture: {% if posture_findings %}{{ posture_findings | join(sep=\", \") }}{% else %}Neutral{% endif %}.\
{% if dermatomes %} Dermatomal distribution: {{ dermatomes | join(sep=\", \") }}.{% endif %}";

const ASSESSMENT: &str = "Primary Diag: {{ primary_diagnosis }}. \
Risk Profile: {{ injury_risk }}. \
Prognosis: {{ weeks_min }}-{{ weeks_max }} weeks.\
{% if red_flags %} Red flags: {{ red_flags | join(sep=\", \") | upper }}.{% endif %}";

const PLAN: &str = "{% if red_flags %}Refer for medical review before loading. {% endif %}\
Focus: {{ training_priority }}. \
Interventions: {% if interventions %}{{ interventions | join(sep=\", \") }}{% else %}Monitor{% endif %}.";

/// Everything the SOAP templates can reference.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoteContext {
    pub pain_type: String,
    /// 0–10.
    pub pain_level: u32,
    /// 0–10.
    pub allostatic_load: u32,
    /// 0–100.
    pub mobility_score: u32,
    pub posture_findings: Vec<String>,
    pub dermatomes: Vec<String>,
    pub primary_diagnosis: String,
    pub injury_risk: String,
    pub weeks_min: u32,
    pub weeks_max: u32,
    pub red_flags: Vec<String>,
    pub training_priority: String,
    pub interventions: Vec<String>,
}

/// Compose the four-part note.
pub fn compose_soap(context: &NoteContext) -> Result<SoapNote, NoteError> {
    let mut sections = render_all(
        &[
            ("subjective", SUBJECTIVE),
            ("objective", OBJECTIVE),
            ("assessment", ASSESSMENT),
            ("plan", PLAN),
        ],
        context,
    )?
    .into_iter();

    let mut next = || sections.next().unwrap_or_default();
    Ok(SoapNote {
        subjective: next(),
        objective: next(),
        assessment: next(),
        plan: next(),
    })
}
