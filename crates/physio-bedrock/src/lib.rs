//! physio-bedrock
//!
//! Optional AI report writer over the Bedrock Converse API. Every failure
//! path (network, timeout, unparseable output) degrades to `None` so the
//! rule-based summary can take over.

pub mod client;
pub mod error;
pub mod prompt;
pub mod writer;

pub use error::BedrockError;
pub use writer::{BedrockReportWriter, BoxFuture, ReportWriter};
