use serde_json::{json, Value};
use thiserror::Error;

use crate::handlers::chat_handlers::ChatApiMessage;

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
const DEFAULT_MAX_TOKENS: u32 = 500;
const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("completion response is missing the reply content")]
    MissingContent,
}

/// Talks to the remote chat-completion endpoint. The bearer credential
/// never leaves this process; browsers only ever see the proxy route.
pub struct CompletionClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl CompletionClient {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn from_env() -> Self {
        let api_url =
            std::env::var("COMPLETION_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key = std::env::var("COMPLETION_API_KEY").expect("COMPLETION_API_KEY must be set");
        let model =
            std::env::var("COMPLETION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(api_url, api_key, model)
    }

    pub fn build_payload(&self, messages: &[ChatApiMessage]) -> Value {
        json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        })
    }

    pub async fn complete(&self, messages: &[ChatApiMessage]) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&self.build_payload(messages))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %body, "completion endpoint rejected the request");
            return Err(CompletionError::Status(status));
        }

        let response_json: Value = response.json().await?;
        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or(CompletionError::MissingContent)?;

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CompletionClient {
        CompletionClient::new(
            "http://localhost:9/unreachable".to_string(),
            "test-key".to_string(),
            DEFAULT_MODEL.to_string(),
        )
    }

    #[test]
    fn payload_carries_model_history_and_caps() {
        let messages = vec![
            ChatApiMessage {
                role: "system".to_string(),
                content: "You are a helpful assistant.".to_string(),
            },
            ChatApiMessage {
                role: "user".to_string(),
                content: "What discount do you offer?".to_string(),
            },
        ];

        let payload = client().build_payload(&messages);

        assert_eq!(payload["model"], DEFAULT_MODEL);
        assert_eq!(payload["max_tokens"], DEFAULT_MAX_TOKENS);
        assert_eq!(payload["temperature"], 0.7);
        assert_eq!(payload["messages"].as_array().unwrap().len(), 2);
        assert_eq!(payload["messages"][1]["role"], "user");
        assert_eq!(payload["messages"][1]["content"], "What discount do you offer?");
    }

    #[tokio::test]
    async fn transport_failure_is_an_error_not_a_panic() {
        let messages = vec![ChatApiMessage {
            role: "user".to_string(),
            content: "hello".to_string(),
        }];
        let result = client().complete(&messages).await;
        assert!(matches!(result, Err(CompletionError::Transport(_))));
    }
}
