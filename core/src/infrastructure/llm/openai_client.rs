use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::{
        entities::{Completion, CompletionContent},
        ports::CompletionClient,
        value_objects::{ChatMessage, CompletionRequest},
    },
};

const RETRY_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct OpenAICompletionClient {
    api_key: String,
    base_url: String,
    max_retries: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<Value>,
    #[serde(default)]
    refusal: Option<String>,
}

/// Failure of a single HTTP attempt, before retries are decided.
///
/// Reading the body counts as transport: the client timeout also covers it.
#[derive(Debug)]
enum AttemptError {
    Transport(reqwest::Error),
    Status { status: StatusCode, body: String },
    Decode(serde_json::Error),
}

impl AttemptError {
    fn is_transient(&self) -> bool {
        match self {
            AttemptError::Transport(e) => e.is_timeout() || e.is_connect(),
            AttemptError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            AttemptError::Decode(_) => false,
        }
    }
}

impl From<AttemptError> for CoreError {
    fn from(error: AttemptError) -> Self {
        match error {
            AttemptError::Transport(e) if e.is_timeout() => CoreError::Timeout,
            AttemptError::Transport(e) => {
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            }
            AttemptError::Status { status, body } => CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, body
            )),
            AttemptError::Decode(e) => {
                CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
            }
        }
    }
}

impl OpenAICompletionClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.openai_api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            client,
        })
    }

    async fn call_openai_api(
        &self,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<ChatCompletionResponse, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);
        let mut attempt = 0;

        loop {
            match self.send_once(&url, request).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(attempt, "Transient LLM API failure, retrying: {:?}", e);
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(e) => {
                    tracing::error!("LLM API request failed: {:?}", e);
                    return Err(e.into());
                }
            }
        }
    }

    async fn send_once(
        &self,
        url: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<ChatCompletionResponse, AttemptError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(AttemptError::Transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AttemptError::Status { status, body });
        }

        let body = response.bytes().await.map_err(AttemptError::Transport)?;

        serde_json::from_slice(&body).map_err(AttemptError::Decode)
    }
}

impl ChatCompletionResponse {
    fn into_completion(self) -> Result<Completion, CoreError> {
        let message = self
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))?;

        if let Some(refusal) = message.refusal.filter(|r| !r.is_empty()) {
            return Ok(Completion::Refused(refusal));
        }

        match message.content {
            Some(Value::String(text)) => Ok(Completion::Content(CompletionContent::Text(text))),
            Some(Value::Null) | None => Err(CoreError::ExternalServiceError(
                "LLM response had no content".to_string(),
            )),
            Some(structured) => Ok(Completion::Content(CompletionContent::Structured(
                structured,
            ))),
        }
    }
}

impl CompletionClient for OpenAICompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, CoreError> {
        let body = ChatCompletionRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            frequency_penalty: request.frequency_penalty,
            presence_penalty: request.presence_penalty,
        };

        self.call_openai_api(&body).await?.into_completion()
    }
}
