//! physio-notes
//!
//! Clinical note composition from Tera templates: the four-part SOAP note
//! attached to every consult, the patient explanation, and the Markdown
//! rendering of a final summary.

pub mod error;
pub mod explanation;
pub mod render;
pub mod soap;
pub mod summary;

pub use error::NoteError;
