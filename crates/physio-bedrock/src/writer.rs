use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use physio_core::models::consult::ConsultResult;
use physio_core::models::history::HistoryEntry;
use physio_core::models::summary::WrittenReport;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::BedrockError;
use crate::prompt;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Writes a narrative report for a finished consult.
///
/// Implementations must not fail: any problem yields `None` and the caller
/// falls back to the rule-based summary.
pub trait ReportWriter: Send + Sync {
    fn write_report<'a>(
        &'a self,
        history: &'a [HistoryEntry],
        consult: &'a ConsultResult,
    ) -> BoxFuture<'a, Option<WrittenReport>>;
}

/// [`ReportWriter`] backed by a Bedrock Converse model.
pub struct BedrockReportWriter {
    client: Client,
    model_id: String,
    timeout: Duration,
}

impl BedrockReportWriter {
    pub fn new(client: Client, model_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            timeout,
        }
    }

    async fn generate(
        &self,
        history: &[HistoryEntry],
        consult: &ConsultResult,
    ) -> Result<WrittenReport, BedrockError> {
        let user_message = prompt::build_user_message(history, consult)?;
        let response_text =
            invoke_converse(&self.client, &self.model_id, prompt::SYSTEM_PROMPT, &user_message)
                .await?;
        prompt::parse_report(&response_text)
    }
}

impl ReportWriter for BedrockReportWriter {
    fn write_report<'a>(
        &'a self,
        history: &'a [HistoryEntry],
        consult: &'a ConsultResult,
    ) -> BoxFuture<'a, Option<WrittenReport>> {
        Box::pin(async move {
            let transaction_id = Uuid::new_v4();
            info!(transaction_id = %transaction_id, model = %self.model_id, "starting report generation");

            let outcome = match tokio::time::timeout(self.timeout, self.generate(history, consult)).await
            {
                Ok(result) => result,
                Err(_) => Err(BedrockError::Timeout(self.timeout.as_secs())),
            };

            match outcome {
                Ok(report) => {
                    info!(transaction_id = %transaction_id, "report generation complete");
                    Some(report)
                }
                Err(e) => {
                    warn!(transaction_id = %transaction_id, error = %e, "report generation failed, falling back");
                    None
                }
            }
        })
    }
}

/// Single-turn Converse call. Returns the concatenated text blocks.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<String, BedrockError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if let Some(usage) = response.usage() {
        info!(
            model = model_id,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "converse usage"
        );
    }

    Ok(response_text)
}
