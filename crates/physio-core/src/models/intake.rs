use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::answer::Answer;
use crate::error::CoreError;
use crate::tags::normalize_tag;

/// The structured clinical intake consumed by the doctor.
///
/// Every section is optional on the wire. A missing or `null` section is an
/// empty record, never a fault. Wrongly typed fields in the typed sections
/// are rejected: no intake mapper produces them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Intake {
    #[serde(deserialize_with = "null_as_default")]
    pub pain: PainRecord,
    pub mobility: SubRecord,
    pub posture: SubRecord,
    pub sleep: SubRecord,
    #[serde(alias = "psychosocial")]
    pub social: SubRecord,
    pub stress: SubRecord,
    pub cardio: SubRecord,
    pub strength: SubRecord,
    pub nutrition: SubRecord,
    pub history: SubRecord,
    #[serde(alias = "ergonomics")]
    pub ergo: SubRecord,
    pub physique: SubRecord,
    #[serde(deserialize_with = "null_as_default")]
    pub profile: Profile,
    /// Review-of-systems answers keyed by question id (`ros_fever`, `rf_saddle`, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub ros: BTreeMap<String, Answer>,
}

impl Intake {
    /// Parse an intake from an arbitrary JSON value.
    ///
    /// Only a JSON object is a well-formed intake. Review-of-systems answers
    /// given at the top level (`"ros_fever": "yes"`) are moved under `ros`;
    /// an answer already present under `ros` wins. Any other unrecognised
    /// key is logged and ignored.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        let mut map = match value {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(CoreError::MalformedIntake(format!(
                    "intake must be a JSON object, got {}",
                    json_kind(&other)
                )));
            }
        };

        let unrecognised: Vec<String> = map
            .keys()
            .filter(|key| !SECTIONS.contains(&key.as_str()))
            .cloned()
            .collect();
        let mut flat_ros = serde_json::Map::new();
        for key in unrecognised {
            let Some(answer) = map.remove(&key) else {
                continue;
            };
            let question = normalize_tag(&key);
            if question.starts_with("ros_") || question.starts_with("rf_") {
                flat_ros.insert(question, answer);
            } else {
                tracing::warn!(key = %key, "ignoring unrecognised intake section");
            }
        }
        if !flat_ros.is_empty() {
            let ros = map
                .entry("ros")
                .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
            if ros.is_null() {
                *ros = serde_json::Value::Object(serde_json::Map::new());
            }
            // A non-object `ros` is left for the typed parse to reject.
            if let serde_json::Value::Object(nested) = ros {
                for (question, answer) in flat_ros {
                    nested.entry(question).or_insert(answer);
                }
            }
        }

        serde_json::from_value(serde_json::Value::Object(map))
            .map_err(|e| CoreError::MalformedIntake(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }
}

/// Top-level keys [`Intake`] reads, aliases included.
const SECTIONS: &[&str] = &[
    "pain",
    "mobility",
    "posture",
    "sleep",
    "social",
    "psychosocial",
    "stress",
    "cardio",
    "strength",
    "nutrition",
    "history",
    "ergo",
    "ergonomics",
    "physique",
    "profile",
    "ros",
];

/// The pain sub-record: the only section the differential engine reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PainRecord {
    pub locations: Vec<String>,
    pub quality: Vec<String>,
    pub aggravators: Vec<String>,
    pub relievers: Vec<String>,
    /// Worst reported intensity on a 0–10 scale.
    pub pain_level: f64,
    pub red_flags_symptoms: Vec<String>,
    pub severity: Option<Severity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub age: Option<u32>,
    pub sex: Option<String>,
}

/// Severity tier fed to the recovery estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "mild" => Ok(Self::Mild),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            other => Err(CoreError::UnknownSeverity(other.to_string())),
        }
    }
}

/// A free-form domain sub-record handed to a specialist scorer.
///
/// Specialists read it through the typed accessors below; a field of the
/// wrong type is the specialist's problem to report, not a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubRecord(pub serde_json::Map<String, serde_json::Value>);

impl<'de> Deserialize<'de> for SubRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Option::<serde_json::Map<String, serde_json::Value>>::deserialize(deserializer)?;
        Ok(Self(map.unwrap_or_default()))
    }
}

/// A field present in a sub-record with an unusable type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTypeError {
    pub field: String,
    pub expected: &'static str,
}

impl SubRecord {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.0.insert(key.into(), value);
    }

    /// Numeric field. Numeric strings ("7") are accepted.
    pub fn number(&self, key: &str) -> Result<Option<f64>, FieldTypeError> {
        match self.get(key) {
            None => Ok(None),
            Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
            Some(serde_json::Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| type_error(key, "number")),
            Some(_) => Err(type_error(key, "number")),
        }
    }

    pub fn answer(&self, key: &str) -> Answer {
        self.get(key).map(Answer::from_value).unwrap_or_default()
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    /// List-of-strings field. A single string is read as a one-element list.
    pub fn tags(&self, key: &str) -> Result<Vec<String>, FieldTypeError> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(serde_json::Value::String(s)) => Ok(vec![s.clone()]),
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| type_error(key, "list of strings"))
                })
                .collect(),
            Some(_) => Err(type_error(key, "list of strings")),
        }
    }

    /// Keys whose value resolves to [`Answer::Yes`], in key order.
    pub fn affirmed_keys(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, v)| Answer::from_value(v).is_yes())
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Combine two records; keys in `other` win.
    pub fn merged(&self, other: &SubRecord) -> SubRecord {
        let mut map = self.0.clone();
        for (k, v) in &other.0 {
            map.insert(k.clone(), v.clone());
        }
        SubRecord(map)
    }
}

impl From<serde_json::Value> for SubRecord {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

fn type_error(field: &str, expected: &'static str) -> FieldTypeError {
    FieldTypeError {
        field: field.to_string(),
        expected,
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
