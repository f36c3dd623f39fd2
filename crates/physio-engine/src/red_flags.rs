use std::collections::BTreeSet;
use std::sync::Arc;

use physio_core::models::consult::{SafetyFlag, SafetyReport};
use physio_core::models::intake::Intake;
use physio_core::tags::{has_specific_segment, normalize_tag, tag_contains};
use physio_knowledge::KnowledgeBase;

/// Age thresholds that become `age_gt_N` tags.
const AGE_THRESHOLDS: &[u32] = &[40, 50, 60, 70];

/// Zero-tolerance red-flag scanner.
///
/// Every condition in the criteria table is evaluated on every call, and a
/// single matching finding is enough to flag it. The scan is independent of
/// the differential: flags are never filtered by diagnosis ranking.
///
/// An observed tag matches a criterion tag when either contains the other
/// as a whole run of `_` segments. The partial direction (`cancer` for
/// `history_cancer`) only applies to tags that are not themselves a
/// recognised intake tag and carry a specific segment, so `numbness` does
/// not stand in for `left_arm_numbness`.
#[derive(Debug, Clone)]
pub struct RedFlagEngine {
    kb: Arc<KnowledgeBase>,
}

impl RedFlagEngine {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn scan(&self, intake: &Intake) -> SafetyReport {
        let observed = self.observed_tags(intake);

        let flags: Vec<SafetyFlag> = self
            .kb
            .red_flag_criteria()
            .iter()
            .filter_map(|criterion| {
                let matched: BTreeSet<String> = criterion
                    .tags
                    .iter()
                    .filter(|wanted| observed.iter().any(|seen| self.matches(seen, wanted)))
                    .cloned()
                    .collect();
                (!matched.is_empty()).then(|| SafetyFlag {
                    condition_id: criterion.condition_id.clone(),
                    matched_tags: matched,
                })
            })
            .collect();

        if flags.is_empty() {
            tracing::debug!(
                observed = observed.len(),
                conditions = self.kb.red_flag_criteria().len(),
                "red-flag scan clear"
            );
        } else {
            tracing::warn!(
                flagged = ?flags.iter().map(|f| f.condition_id.as_str()).collect::<Vec<_>>(),
                "red flags raised"
            );
        }

        SafetyReport { flags }
    }

    fn matches(&self, seen: &str, wanted: &str) -> bool {
        tag_contains(seen, wanted)
            || (!self.kb.is_intake_tag(seen)
                && has_specific_segment(seen)
                && tag_contains(wanted, seen))
    }

    /// Every positive finding the intake carries, normalised.
    ///
    /// Sources: pain red-flag symptoms, review-of-systems answers, affirmed
    /// history keys plus any `history.flags` list, and profile-derived age
    /// tags. Each finding from any source is expanded through the ROS alias
    /// table and its `ros_`/`rf_` prefix. Missing sections contribute nothing.
    pub fn observed_tags(&self, intake: &Intake) -> BTreeSet<String> {
        let mut tags = BTreeSet::new();

        for symptom in &intake.pain.red_flags_symptoms {
            self.insert_finding(&mut tags, symptom);
        }

        for (question, answer) in &intake.ros {
            if answer.is_yes() {
                self.insert_finding(&mut tags, question);
            }
        }

        for key in intake.history.affirmed_keys() {
            self.insert_finding(&mut tags, key);
        }
        // A mistyped flags list is treated as absent rather than failing the scan.
        for flag in intake.history.tags("flags").unwrap_or_default() {
            self.insert_finding(&mut tags, &flag);
        }

        if let Some(age) = intake.profile.age {
            for threshold in AGE_THRESHOLDS.iter().filter(|&&t| age > t) {
                tags.insert(format!("age_gt_{threshold}"));
            }
        }

        tags
    }

    fn insert_finding(&self, tags: &mut BTreeSet<String>, raw: &str) {
        let tag = normalize_tag(raw);
        if tag.is_empty() {
            return;
        }
        if let Some(alias) = self.kb.ros_alias(&tag) {
            tags.insert(alias.to_string());
        }
        if let Some(stripped) = tag.strip_prefix("ros_").or_else(|| tag.strip_prefix("rf_"))
            && !stripped.is_empty()
        {
            tags.insert(stripped.to_string());
        }
        tags.insert(tag);
    }
}
