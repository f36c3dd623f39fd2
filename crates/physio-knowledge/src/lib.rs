//! physio-knowledge
//!
//! Immutable clinical reference data: the dermatome map, pathology
//! signatures and red-flag criteria. Pure data plus lookup; the tables are
//! validated once at load and never mutated afterwards, so one
//! `KnowledgeBase` can be shared by every concurrent consult.

pub mod dermatomes;
pub mod error;
pub mod red_flags;
pub mod signatures;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use physio_core::tags::normalize_tag;

pub use dermatomes::Dermatome;
pub use error::KnowledgeError;
pub use red_flags::RedFlagCriterion;
pub use signatures::PathologySignature;

/// Raw tables handed to [`KnowledgeBase::from_tables`].
#[derive(Debug, Clone)]
pub struct KnowledgeTables {
    pub dermatomes: Vec<Dermatome>,
    pub signatures: Vec<PathologySignature>,
    pub red_flags: Vec<RedFlagCriterion>,
    /// `(question id, intake tag)` pairs.
    pub ros_aliases: Vec<(String, String)>,
    pub intake_tags: Vec<String>,
}

impl KnowledgeTables {
    /// The tables compiled into this build.
    pub fn builtin() -> Self {
        Self {
            dermatomes: dermatomes::builtin(),
            signatures: signatures::builtin(),
            red_flags: red_flags::builtin(),
            ros_aliases: red_flags::builtin_ros_aliases(),
            intake_tags: red_flags::builtin_intake_tags(),
        }
    }
}

#[derive(Debug)]
pub struct KnowledgeBase {
    dermatomes: Vec<Dermatome>,
    signatures: Vec<PathologySignature>,
    signature_index: HashMap<String, usize>,
    red_flags: Vec<RedFlagCriterion>,
    ros_aliases: BTreeMap<String, String>,
    intake_tags: BTreeSet<String>,
}

impl KnowledgeBase {
    /// Load and validate the built-in tables.
    pub fn load() -> Result<Self, KnowledgeError> {
        Self::from_tables(KnowledgeTables::builtin())
    }

    /// Validate `tables` and index them.
    ///
    /// Fails on a duplicated or empty signature id, a prior outside `[0, 1]`,
    /// a duplicated or empty red-flag criterion, or any reference to a tag
    /// the intake cannot produce.
    pub fn from_tables(tables: KnowledgeTables) -> Result<Self, KnowledgeError> {
        let intake_tags: BTreeSet<String> = tables.intake_tags.into_iter().collect();

        for dermatome in &tables.dermatomes {
            if dermatome.regions.is_empty() {
                return Err(KnowledgeError::EmptyDermatome(dermatome.level.clone()));
            }
        }

        let mut signature_index = HashMap::with_capacity(tables.signatures.len());
        for (position, signature) in tables.signatures.iter().enumerate() {
            if signature.id.is_empty() {
                return Err(KnowledgeError::EmptySignatureId);
            }
            if !(0.0..=1.0).contains(&signature.probability_base) {
                return Err(KnowledgeError::PriorOutOfRange {
                    id: signature.id.clone(),
                    value: signature.probability_base,
                });
            }
            if let Some(flag) = &signature.history_flag
                && !intake_tags.contains(flag)
            {
                return Err(KnowledgeError::UnrecognizedTag {
                    source_id: signature.id.clone(),
                    tag: flag.clone(),
                });
            }
            if signature_index.insert(signature.id.clone(), position).is_some() {
                return Err(KnowledgeError::DuplicateSignature(signature.id.clone()));
            }
        }

        let mut conditions = HashSet::with_capacity(tables.red_flags.len());
        for criterion in &tables.red_flags {
            if !conditions.insert(criterion.condition_id.as_str()) {
                return Err(KnowledgeError::DuplicateCriterion(criterion.condition_id.clone()));
            }
            if criterion.tags.is_empty() {
                return Err(KnowledgeError::EmptyCriterion(criterion.condition_id.clone()));
            }
            if let Some(tag) = criterion.tags.iter().find(|t| !intake_tags.contains(*t)) {
                return Err(KnowledgeError::UnrecognizedTag {
                    source_id: criterion.condition_id.clone(),
                    tag: tag.clone(),
                });
            }
        }

        for (question, tag) in &tables.ros_aliases {
            if !intake_tags.contains(tag) {
                return Err(KnowledgeError::UnrecognizedTag {
                    source_id: question.clone(),
                    tag: tag.clone(),
                });
            }
        }

        tracing::info!(
            dermatomes = tables.dermatomes.len(),
            signatures = tables.signatures.len(),
            red_flags = tables.red_flags.len(),
            intake_tags = intake_tags.len(),
            "knowledge base loaded"
        );

        Ok(Self {
            dermatomes: tables.dermatomes,
            signatures: tables.signatures,
            signature_index,
            red_flags: tables.red_flags,
            ros_aliases: tables.ros_aliases.into_iter().collect(),
            intake_tags,
        })
    }

    pub fn dermatomes(&self) -> &[Dermatome] {
        &self.dermatomes
    }

    /// All signatures, in table order.
    pub fn signatures(&self) -> &[PathologySignature] {
        &self.signatures
    }

    pub fn signature(&self, id: &str) -> Option<&PathologySignature> {
        self.signature_index.get(id).map(|&i| &self.signatures[i])
    }

    /// All red-flag criteria, in table order.
    pub fn red_flag_criteria(&self) -> &[RedFlagCriterion] {
        &self.red_flags
    }

    /// The intake tag a review-of-systems question id stands for, if aliased.
    pub fn ros_alias(&self, question_id: &str) -> Option<&str> {
        self.ros_aliases.get(question_id).map(String::as_str)
    }

    pub fn is_intake_tag(&self, tag: &str) -> bool {
        self.intake_tags.contains(tag)
    }

    /// Nerve-root level supplying `region`.
    ///
    /// Matching is substring-tolerant in both directions (`"heel_pain"`
    /// matches `heel`, `"thumb"` matches `thumb`), and the first level in
    /// table order wins.
    pub fn dermatome_for(&self, region: &str) -> Option<&str> {
        let query = normalize_tag(region);
        if query.is_empty() {
            return None;
        }
        self.dermatomes
            .iter()
            .find(|d| {
                d.regions
                    .iter()
                    .any(|area| query.contains(area.as_str()) || area.contains(query.as_str()))
            })
            .map(|d| d.level.as_str())
    }
}
