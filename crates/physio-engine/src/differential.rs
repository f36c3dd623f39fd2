use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

use physio_core::models::consult::DiagnosisCandidate;
use physio_core::models::intake::PainRecord;
use physio_core::tags::normalize_all;
use physio_knowledge::{KnowledgeBase, PathologySignature};

/// Category weights. Location is the most specific signal, then pain
/// quality, then aggravating activity. They sum to 1, so the raw match
/// score is in `[0, 1]`.
pub const REGION_WEIGHT: f64 = 0.5;
pub const QUALITY_WEIGHT: f64 = 0.3;
pub const AGGRAVATOR_WEIGHT: f64 = 0.2;

/// Number of candidates reported.
pub const MAX_CANDIDATES: usize = 5;

/// The symptom profile matched against signatures. Duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomSnapshot {
    pub locations: BTreeSet<String>,
    pub quality: BTreeSet<String>,
    pub aggravators: BTreeSet<String>,
}

impl SymptomSnapshot {
    pub fn new<L, Q, A>(locations: L, quality: Q, aggravators: A) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        Q: IntoIterator,
        Q::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
            quality: quality.into_iter().map(Into::into).collect(),
            aggravators: aggravators.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from the pain sub-record, normalising free-text tags.
    pub fn from_pain(pain: &PainRecord) -> Self {
        Self::new(
            normalize_all(&pain.locations),
            normalize_all(&pain.quality),
            normalize_all(&pain.aggravators),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.quality.is_empty() && self.aggravators.is_empty()
    }
}

/// Fraction of `reference` present in `observed`; 0 when `reference` is empty.
fn overlap(observed: &BTreeSet<String>, reference: &BTreeSet<String>) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }
    let hits = reference.intersection(observed).count();
    hits as f64 / reference.len() as f64
}

/// Weighted category overlap of `snapshot` against `signature`, in `[0, 1]`.
pub fn raw_match_score(snapshot: &SymptomSnapshot, signature: &PathologySignature) -> f64 {
    REGION_WEIGHT * overlap(&snapshot.locations, &signature.regions)
        + QUALITY_WEIGHT * overlap(&snapshot.quality, &signature.quality)
        + AGGRAVATOR_WEIGHT * overlap(&snapshot.aggravators, &signature.aggravators)
}

/// Ranks pathology signatures against a symptom snapshot.
#[derive(Debug, Clone)]
pub struct DifferentialDiagnosisEngine {
    kb: Arc<KnowledgeBase>,
}

impl DifferentialDiagnosisEngine {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    /// Score every signature and return the top candidates.
    ///
    /// `score = raw_match × (1 + probability_base)`: the match drives the
    /// ranking and the prior can at most double it. Signatures with no
    /// match at all are not reported. Ties break on prior (descending),
    /// then id (ascending).
    pub fn analyze(&self, snapshot: &SymptomSnapshot) -> Vec<DiagnosisCandidate> {
        if snapshot.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(&PathologySignature, f64)> = self
            .kb
            .signatures()
            .iter()
            .filter_map(|signature| {
                let raw = raw_match_score(snapshot, signature);
                (raw > 0.0).then(|| (signature, raw * (1.0 + signature.probability_base)))
            })
            .collect();

        scored.sort_by(|(a, a_score), (b, b_score)| {
            b_score
                .partial_cmp(a_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.probability_base
                        .partial_cmp(&a.probability_base)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.id.cmp(&b.id))
        });
        scored.truncate(MAX_CANDIDATES);

        tracing::debug!(
            matched = scored.len(),
            top = scored.first().map(|(s, _)| s.id.as_str()),
            "differential ranked"
        );

        scored
            .into_iter()
            .map(|(signature, score)| DiagnosisCandidate {
                pathology_id: signature.id.clone(),
                score,
            })
            .collect()
    }
}
