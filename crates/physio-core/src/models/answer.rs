use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// A yes/no intake answer as resolved at the intake boundary.
///
/// Free-text answers ("Yes", "y", `true`, `1`) are folded into one of three
/// states. Anything that is not recognisably yes or no is `Unknown`, and
/// every consumer treats `Unknown` as "not observed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Answer {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Answer {
    pub fn from_text(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Self::Yes,
            "no" | "n" | "false" | "0" => Self::No,
            _ => Self::Unknown,
        }
    }

    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(true) => Self::Yes,
            serde_json::Value::Bool(false) => Self::No,
            serde_json::Value::String(s) => Self::from_text(s),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(v) if v == 1.0 => Self::Yes,
                Some(v) if v == 0.0 => Self::No,
                _ => Self::Unknown,
            },
            _ => Self::Unknown,
        }
    }

    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
