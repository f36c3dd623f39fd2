use std::sync::LazyLock;

use physio_bedrock::BoxFuture;
use physio_core::models::consult::ConsultResult;
use physio_core::models::history::HistoryEntry;
use serde::{Deserialize, Serialize};

use crate::session::Mode;

/// How a question is answered in the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Slider { min: i32, max: i32 },
    YesNo,
    Choice { options: Vec<String> },
    MultiSelect { options: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    /// 1-based position in the session, set by the driver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<usize>,
}

impl Question {
    pub fn new(id: &str, text: &str, kind: QuestionKind) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            kind,
            progress: None,
        }
    }

    pub fn yes_no(id: &str, text: &str) -> Self {
        Self::new(id, text, QuestionKind::YesNo)
    }

    pub fn slider(id: &str, text: &str, min: i32, max: i32) -> Self {
        Self::new(id, text, QuestionKind::Slider { min, max })
    }
}

/// Chooses the next question, or `None` when the assessment is complete.
pub trait QuestionGenerator: Send + Sync {
    fn next_question<'a>(
        &'a self,
        history: &'a [HistoryEntry],
        consult: &'a ConsultResult,
        mode: Mode,
    ) -> BoxFuture<'a, Option<Question>>;
}

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static QUESTIONNAIRE: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        Question::new(
            "p_loc",
            "Where do you feel the pain?",
            QuestionKind::MultiSelect {
                options: options(&[
                    "neck", "shoulder", "upper_arm", "elbow_lateral", "wrist", "thumb",
                    "low_back", "buttock", "groin", "leg", "knee_anterior", "calves", "heel",
                    "foot",
                ]),
            },
        ),
        Question::new(
            "p_qual",
            "How would you describe the pain?",
            QuestionKind::MultiSelect {
                options: options(&[
                    "sharp", "dull", "aching", "burning", "shooting", "electric", "tingling",
                    "stiffness",
                ]),
            },
        ),
        Question::slider("p_int_rest", "How strong is the pain at rest?", 0, 10),
        Question::slider("p_int_move", "How strong is the pain when you move?", 0, 10),
        Question::yes_no("p_trig_sit", "Does sitting make it worse?"),
        Question::yes_no("p_trig_stand", "Does standing make it worse?"),
        Question::yes_no("p_trig_walk", "Does walking make it worse?"),
        Question::yes_no("rf_saddle", "Any numbness around the groin or inner thighs?"),
        Question::yes_no("rf_bladder", "Any new difficulty passing urine?"),
        Question::yes_no("rf_bowel", "Any loss of bowel control?"),
        Question::yes_no("ros_fever", "Have you had a fever recently?"),
        Question::yes_no("ros_weight", "Have you lost weight without trying?"),
        Question::yes_no("ros_sweat", "Do you wake up drenched in sweat?"),
        Question::yes_no("hist_cancer", "Have you ever been treated for cancer?"),
        Question::yes_no("hist_trauma", "Did the pain start after a fall or accident?"),
        Question::yes_no("neuro_numb", "Any numbness in the arms or legs?"),
        Question::slider("m_rate", "How limited is your movement (0 none, 10 severe)?", 0, 10),
        Question::new(
            "s_dur",
            "How long do you usually sleep?",
            QuestionKind::Choice {
                options: options(&["< 5 hours", "5-7 hours", "7-9 hours", "9+ hours"]),
            },
        ),
        Question::slider("s_qual", "How well do you sleep?", 0, 10),
        Question::slider("str_lvl", "How stressed have you felt lately?", 0, 10),
        Question::yes_no("m_fear", "Are you afraid that moving will make it worse?"),
        Question::slider("c_rate", "How is your cardiovascular fitness?", 0, 10),
        Question::yes_no("ch_bp", "Have you been told you have high blood pressure?"),
        Question::yes_no("hab_smoke", "Do you smoke?"),
        Question::slider("st_rate", "How strong do you feel overall?", 0, 10),
        Question::slider("n_rate", "How balanced is your diet?", 0, 10),
        Question::slider("e_risk", "How awkward is your workstation setup?", 0, 10),
        Question::yes_no("vis_strain", "Do your eyes get tired at the screen?"),
    ]
});

/// A fixed questionnaire that asks each question once, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedQuestions;

impl ScriptedQuestions {
    pub fn questionnaire() -> &'static [Question] {
        &QUESTIONNAIRE
    }
}

impl QuestionGenerator for ScriptedQuestions {
    fn next_question<'a>(
        &'a self,
        history: &'a [HistoryEntry],
        _consult: &'a ConsultResult,
        _mode: Mode,
    ) -> BoxFuture<'a, Option<Question>> {
        let next = QUESTIONNAIRE
            .iter()
            .find(|q| !history.iter().any(|h| h.id == q.id))
            .cloned();
        Box::pin(async move { next })
    }
}
