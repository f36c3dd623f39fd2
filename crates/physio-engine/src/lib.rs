//! physio-engine
//!
//! The matching and triage engine: differential-diagnosis scoring, the
//! red-flag scanner, recovery-trajectory estimation, the per-domain
//! specialist scorers, and the `Doctor` that composes them into one
//! consult. Everything here is synchronous and free of I/O; the only shared
//! state is the read-only `KnowledgeBase`.

pub mod differential;
pub mod doctor;
pub mod error;
pub mod recovery;
pub mod red_flags;
pub mod specialists;

pub use differential::{DifferentialDiagnosisEngine, SymptomSnapshot};
pub use doctor::{Doctor, FALLBACK_DIAGNOSIS};
pub use error::SpecialistError;
pub use recovery::{RecoveryTrajectoryEngine, TissueCategory};
pub use red_flags::RedFlagEngine;
pub use specialists::{Domain, Specialist};
