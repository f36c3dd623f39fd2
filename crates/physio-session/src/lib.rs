//! physio-session
//!
//! Everything around the triage core that a questionnaire front end needs:
//! mapping raw answer history onto an intake, the question-generator and
//! quality-control collaborators, the per-session turn state, and final
//! summary assembly with its AI and rule-based paths.

pub mod error;
pub mod history;
pub mod quality;
pub mod questions;
pub mod session;
pub mod summary;

pub use error::SessionError;
pub use history::{map_history_to_intake, parse_history};
pub use quality::{AcceptAllQualityControl, QualityControl};
pub use questions::{Question, QuestionGenerator, QuestionKind, ScriptedQuestions};
pub use session::{Mode, SessionDriver, SessionState, Step, DEFAULT_MAX_TURNS};
pub use summary::assemble_summary;
