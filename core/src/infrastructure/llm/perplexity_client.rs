use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    common::entities::app_errors::CoreError,
    receipt_analysis::{ports::LlmClient, value_objects::ReceiptImage},
};
use crate::infrastructure::llm::classify_status;

const CHAT_COMPLETIONS_URL: &str = "https://api.perplexity.ai/chat/completions";

#[derive(Debug, Clone)]
pub struct PerplexityLlmClient {
    api_key: Option<String>,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

impl PerplexityLlmClient {
    pub fn new(api_key: Option<String>, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }

    async fn call_chat_api(&self, request: ChatRequest) -> Result<String, CoreError> {
        let api_key = self.api_key.as_deref().ok_or(CoreError::ProviderAuthMissing)?;

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Perplexity API request failed: {}", e);
                CoreError::ProviderUnavailable(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Perplexity API error: {} - {}", status, error_text);
            return Err(classify_status(status, error_text));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Perplexity response: {}", e);
            CoreError::ProviderCallFailed(format!("Failed to parse LLM response: {}", e))
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ProviderCallFailed("No response from LLM".to_string()))
    }
}

impl LlmClient for PerplexityLlmClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: ReceiptImage,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image.data);
        let data_url = format!("data:{};base64,{}", image.mime.as_str(), base64_image);

        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentPart::Text { text: prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_url },
                    },
                ],
            }],
            response_format: Some(json!({
                "type": "json_schema",
                "json_schema": { "schema": response_schema }
            })),
        };

        self.call_chat_api(request).await
    }
}
