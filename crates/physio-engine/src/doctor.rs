use std::collections::BTreeMap;
use std::sync::Arc;

use physio_core::models::consult::{
    ConsultResult, DiagnosisSummary, Prognosis, SafetyReport, SoapNote, SpecialistOutput,
};
use physio_core::models::intake::Intake;
use physio_core::CoreError;
use physio_knowledge::KnowledgeBase;
use physio_notes::soap::{compose_soap, NoteContext};

use crate::differential::{DifferentialDiagnosisEngine, SymptomSnapshot};
use crate::recovery::RecoveryTrajectoryEngine;
use crate::red_flags::RedFlagEngine;
use crate::specialists::{all_specialists, Domain, Specialist, NEUTRAL_SCORE};

/// Primary diagnosis reported when no signature matched.
pub const FALLBACK_DIAGNOSIS: &str = "undetermined_mechanical_pain";

/// Interventions carried into the plan.
const MAX_INTERVENTIONS: usize = 3;

/// Composes the engines and the domain specialists into one consult.
///
/// Holds nothing but read-only state, so a single `Doctor` behind an `Arc`
/// can serve concurrent consults.
pub struct Doctor {
    differential: DifferentialDiagnosisEngine,
    red_flags: RedFlagEngine,
    recovery: RecoveryTrajectoryEngine,
    specialists: BTreeMap<Domain, Box<dyn Specialist>>,
}

impl Doctor {
    /// A doctor with the default scorer for every domain.
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        let specialists = all_specialists(Arc::clone(&kb))
            .into_iter()
            .map(|s| (s.domain(), s))
            .collect();
        Self {
            differential: DifferentialDiagnosisEngine::new(Arc::clone(&kb)),
            red_flags: RedFlagEngine::new(kb),
            recovery: RecoveryTrajectoryEngine::new(),
            specialists,
        }
    }

    /// Replace the scorer for `specialist.domain()`.
    pub fn with_specialist(mut self, specialist: Box<dyn Specialist>) -> Self {
        self.specialists.insert(specialist.domain(), specialist);
        self
    }

    /// Parse `value` as an intake and consult on it.
    pub fn consult_value(&self, value: serde_json::Value) -> Result<ConsultResult, CoreError> {
        let intake = Intake::from_value(value)?;
        Ok(self.consult(&intake))
    }

    /// Run every engine over `intake`. Never fails: missing sections score
    /// as empty records and a failing specialist is isolated.
    pub fn consult(&self, intake: &Intake) -> ConsultResult {
        let modules: BTreeMap<String, SpecialistOutput> = Domain::ALL
            .iter()
            .map(|domain| (domain.key().to_string(), self.run_specialist(*domain, intake)))
            .collect();
        let scores = Domain::ALL
            .iter()
            .filter_map(|domain| {
                modules
                    .get(domain.key())
                    .map(|output| (domain.label().to_string(), output.score))
            })
            .collect();

        let safety = self.red_flags.scan(intake);

        let snapshot = SymptomSnapshot::from_pain(&intake.pain);
        let top_candidates = self.differential.analyze(&snapshot);
        let primary = top_candidates
            .first()
            .map(|c| c.pathology_id.clone())
            .unwrap_or_else(|| FALLBACK_DIAGNOSIS.to_string());

        let severity = intake.pain.severity.unwrap_or_default();
        let prognosis = self.recovery.predict(&primary, severity, &intake.profile);

        let context = note_context(&modules, &safety, &primary, prognosis);
        let soap_report = compose_soap(&context).unwrap_or_else(|e| {
            tracing::error!(error = %e, "SOAP rendering failed, using plain note");
            plain_note(&context)
        });

        tracing::info!(
            primary = %primary,
            candidates = top_candidates.len(),
            red_flags = safety.flags.len(),
            weeks_min = prognosis.weeks_min,
            weeks_max = prognosis.weeks_max,
            "consult complete"
        );

        ConsultResult {
            safety,
            diagnosis: DiagnosisSummary {
                top_candidates,
                primary,
            },
            prognosis,
            modules,
            scores,
            soap_report,
        }
    }

    fn run_specialist(&self, domain: Domain, intake: &Intake) -> SpecialistOutput {
        let Some(specialist) = self.specialists.get(&domain) else {
            return neutral(format!("no scorer registered for {}", domain.key()));
        };
        match specialist.analyze(&domain.sub_record(intake)) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(domain = domain.key(), error = %e, "specialist failed, using neutral score");
                neutral(e.to_string())
            }
        }
    }
}

fn neutral(failure: String) -> SpecialistOutput {
    let mut output = SpecialistOutput::new(NEUTRAL_SCORE);
    output.failure = Some(failure);
    output
}

fn note_context(
    modules: &BTreeMap<String, SpecialistOutput>,
    safety: &SafetyReport,
    primary: &str,
    prognosis: Prognosis,
) -> NoteContext {
    let module = |domain: Domain| modules.get(domain.key());
    let finding_str = |domain: Domain, key: &str, fallback: &str| {
        module(domain)
            .and_then(|m| m.finding_str(key))
            .unwrap_or(fallback)
            .to_string()
    };
    let finding_list = |domain: Domain, key: &str| {
        module(domain)
            .map(|m| m.finding_list(key))
            .unwrap_or_default()
    };
    let score = |domain: Domain| module(domain).map(|m| m.score).unwrap_or(NEUTRAL_SCORE);

    let pain_level = module(Domain::Pain)
        .and_then(|m| m.finding_f64("pain_level"))
        .unwrap_or_else(|| 10.0 - score(Domain::Pain) / 10.0);
    let allostatic_load = module(Domain::Psychosocial)
        .and_then(|m| m.finding_f64("allostatic_load"))
        .unwrap_or_else(|| 10.0 - score(Domain::Psychosocial) / 10.0);

    let mut interventions = finding_list(Domain::Sleep, "hygiene_protocol");
    interventions.extend(finding_list(Domain::Ergonomics, "recommendations"));
    interventions.extend(finding_list(Domain::Nutrition, "recommendations"));
    interventions.truncate(MAX_INTERVENTIONS);

    NoteContext {
        pain_type: finding_str(Domain::Pain, "type", "unspecified"),
        pain_level: pain_level.round().clamp(0.0, 10.0) as u32,
        allostatic_load: allostatic_load.round().clamp(0.0, 10.0) as u32,
        mobility_score: score(Domain::Mobility).round() as u32,
        posture_findings: finding_list(Domain::Posture, "syndromes"),
        dermatomes: finding_list(Domain::Pain, "dermatomes"),
        primary_diagnosis: primary.to_string(),
        injury_risk: finding_str(Domain::Mobility, "injury_risk", "unknown"),
        weeks_min: prognosis.weeks_min,
        weeks_max: prognosis.weeks_max,
        red_flags: safety
            .flags
            .iter()
            .map(|f| f.condition_id.clone())
            .collect(),
        training_priority: finding_str(Domain::Strength, "training_priority", "General Conditioning"),
        interventions,
    }
}

/// Untemplated note used when rendering fails.
fn plain_note(ctx: &NoteContext) -> SoapNote {
    SoapNote {
        subjective: format!(
            "Patient reports {} pain (Level {}/10). Psychosocial load: {}/10.",
            ctx.pain_type, ctx.pain_level, ctx.allostatic_load
        ),
        objective: format!("Functional Movement Score: {}/100.", ctx.mobility_score),
        assessment: format!(
            "Primary Diag: {}. Prognosis: {}-{} weeks. Red flags: {}.",
            ctx.primary_diagnosis,
            ctx.weeks_min,
            ctx.weeks_max,
            if ctx.red_flags.is_empty() {
                "none".to_string()
            } else {
                ctx.red_flags.join(", ").to_uppercase()
            }
        ),
        plan: format!("Focus: {}.", ctx.training_priority),
    }
}
