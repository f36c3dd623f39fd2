use std::str::FromStr;
use std::sync::Arc;

use physio_bedrock::ReportWriter;
use physio_core::models::history::HistoryEntry;
use physio_core::models::summary::Summary;
use physio_core::tags::normalize_tag;
use physio_engine::Doctor;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::history::map_history_to_intake;
use crate::quality::{AcceptAllQualityControl, QualityControl};
use crate::questions::{Question, QuestionGenerator, QuestionKind};
use crate::summary::assemble_summary;

pub const DEFAULT_MAX_TURNS: usize = 60;

/// Whether the summary may use the AI report writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Rule-based only.
    #[default]
    Sim,
    Ai,
}

impl FromStr for Mode {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "sim" => Ok(Self::Sim),
            "ai" => Ok(Self::Ai),
            other => Err(SessionError::UnknownMode(other.to_string())),
        }
    }
}

/// Per-session state owned by the caller: the turn counter and the
/// quality-control accumulator.
pub struct SessionState {
    turn: usize,
    quality: Box<dyn QualityControl>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_quality(Box::new(AcceptAllQualityControl::new()))
    }

    pub fn with_quality(quality: Box<dyn QualityControl>) -> Self {
        Self { turn: 0, quality }
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Rebuild the state for a history that was answered elsewhere, one
    /// turn per answer.
    pub fn replay(&mut self, history: &[HistoryEntry]) {
        for end in 1..=history.len() {
            self.turn += 1;
            self.quality.analyze_step(&history[end - 1], &history[..end]);
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the front end should do next.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Step {
    Question(Question),
    Complete(Box<Summary>),
}

/// Drives one questionnaire session per [`SessionState`].
///
/// The driver itself is stateless and can serve any number of sessions.
pub struct SessionDriver {
    doctor: Arc<Doctor>,
    questions: Box<dyn QuestionGenerator>,
    report_writer: Option<Arc<dyn ReportWriter>>,
    max_turns: usize,
}

impl SessionDriver {
    pub fn new(doctor: Arc<Doctor>, questions: Box<dyn QuestionGenerator>) -> Self {
        Self {
            doctor,
            questions,
            report_writer: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    pub fn with_report_writer(mut self, writer: Arc<dyn ReportWriter>) -> Self {
        self.report_writer = Some(writer);
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }

    /// Fresh state plus the opening question (the age slider).
    pub fn start(&self) -> (SessionState, Question) {
        tracing::info!(max_turns = self.max_turns, "session started");
        (SessionState::new(), Self::start_question())
    }

    pub fn start_question() -> Question {
        Question::new(
            "age",
            "Select your age range to begin calibration:",
            QuestionKind::Slider { min: 10, max: 90 },
        )
    }

    /// Advance one turn. The last entry of `history` is the answer just given.
    pub async fn next_step(
        &self,
        state: &mut SessionState,
        history: &[HistoryEntry],
        mode: Mode,
    ) -> Step {
        state.turn += 1;
        if let Some(current) = history.last() {
            state.quality.analyze_step(current, history);
        }

        let consult = self.doctor.consult(&map_history_to_intake(history));

        if state.turn >= self.max_turns {
            tracing::info!(turn = state.turn, "turn limit reached");
            return Step::Complete(Box::new(self.summarize(state, history, &consult, mode).await));
        }

        match self.questions.next_question(history, &consult, mode).await {
            Some(mut question) => {
                question.progress = Some(history.len() + 1);
                tracing::debug!(turn = state.turn, question = %question.id, "next question");
                Step::Question(question)
            }
            None => {
                tracing::info!(turn = state.turn, "questionnaire exhausted");
                Step::Complete(Box::new(self.summarize(state, history, &consult, mode).await))
            }
        }
    }

    /// Finish early with whatever has been answered.
    pub async fn summary_now(
        &self,
        state: &SessionState,
        history: &[HistoryEntry],
        mode: Mode,
    ) -> Summary {
        let consult = self.doctor.consult(&map_history_to_intake(history));
        self.summarize(state, history, &consult, mode).await
    }

    async fn summarize(
        &self,
        state: &SessionState,
        history: &[HistoryEntry],
        consult: &physio_core::models::consult::ConsultResult,
        mode: Mode,
    ) -> Summary {
        let writer = match mode {
            Mode::Ai => self.report_writer.as_deref(),
            Mode::Sim => None,
        };
        assemble_summary(consult, history, state.quality.reliability_report(), writer).await
    }
}
