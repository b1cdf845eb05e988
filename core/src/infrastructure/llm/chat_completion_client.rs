use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, diagnosis::ports::LLMClient};

/// Client for OpenAI-compatible `chat/completions` endpoints.
#[derive(Clone)]
pub struct ChatCompletionClient {
    api_key: String,
    api_url: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionClient {
    pub fn new(api_key: String, api_url: String, model_name: String) -> Self {
        Self {
            api_key,
            api_url,
            model_name,
            client: Client::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn call_completion_api(
        &self,
        request: ChatCompletionRequest<'_>,
    ) -> Result<String, CoreError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("LLM API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("LLM API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse LLM API response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        first_completion_text(completion)
    }
}

/// Text of `choices[0].message.content`.
fn first_completion_text(response: ChatCompletionResponse) -> Result<String, CoreError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            tracing::error!("LLM API response has no completion text");
            CoreError::ExternalServiceError("No response from LLM".to_string())
        })
}

impl LLMClient for ChatCompletionClient {
    async fn complete(&self, prompt: String) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: &self.model_name,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        self.call_completion_api(request).await
    }
}
