//! physio-core
//!
//! Pure domain types shared by the triage engine, the session driver and the
//! report writer. No engine logic lives here; this is the vocabulary that
//! crosses crate boundaries and the wire.

pub mod error;
pub mod models;
pub mod tags;

pub use error::CoreError;
