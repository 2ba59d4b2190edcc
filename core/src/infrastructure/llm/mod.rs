use reqwest::StatusCode;

use crate::domain::{
    common::entities::app_errors::CoreError,
    receipt_analysis::{ports::LlmClient, value_objects::ReceiptImage},
};

pub mod gemini_client;
pub mod perplexity_client;

pub use gemini_client::GeminiLlmClient;
pub use perplexity_client::PerplexityLlmClient;

/// The configured provider adapter.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Gemini(GeminiLlmClient),
    Perplexity(PerplexityLlmClient),
}

impl LlmClient for LlmProvider {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: ReceiptImage,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        match self {
            LlmProvider::Gemini(client) => {
                client.generate_with_image(prompt, image, response_schema).await
            }
            LlmProvider::Perplexity(client) => {
                client.generate_with_image(prompt, image, response_schema).await
            }
        }
    }
}

/// Rate limiting and server-side failures are worth retrying; any other
/// non-success status is terminal.
pub(crate) fn classify_status(status: StatusCode, body: String) -> CoreError {
    let message = format!("LLM API returned error: {} - {}", status, body);
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        CoreError::ProviderUnavailable(message)
    } else {
        CoreError::ProviderCallFailed(message)
    }
}
