//! Completion service client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, CompletionConfig};
use crate::ports::CompletionClient;

/// HTTP client for an OpenAI-style chat-completions endpoint.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    model: String,
    temperature: f64,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &CompletionConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }

    /// Create from environment variable with default configuration.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_with_config(&CompletionConfig::default())
    }

    /// Create from environment variable with custom configuration.
    pub fn from_env_with_config(config: &CompletionConfig) -> Result<Self, AppError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            AppError::Configuration("OPENAI_API_KEY environment variable not set".into())
        })?;

        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AppError> {
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content: user_prompt },
            ],
        };

        // Single attempt: the pipeline surfaces failures as displayable
        // text, so there is no retry loop here.
        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::Completion(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            let chat: ChatResponse = response
                .json()
                .map_err(|e| AppError::Completion(format!("Failed to parse response: {}", e)))?;

            chat.choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| AppError::Completion("No completion choices in response".into()))
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::Completion(format!("API error ({}): {}", status.as_u16(), error_text)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::get_completion;
    use serial_test::serial;

    fn test_config(server_url: &str) -> CompletionConfig {
        CompletionConfig {
            api_url: Url::parse(server_url).unwrap(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            timeout_secs: 1,
        }
    }

    #[test]
    fn complete_returns_first_choice_content() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer fake-key")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4o-mini",
                "temperature": 0.2,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "report text"}}]}"#)
            .create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &test_config(&server.url()))
            .unwrap();
        let result = client.complete("system", "user");
        assert_eq!(result.unwrap(), "report text");
    }

    #[test]
    fn complete_sends_system_then_user_messages() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "messages": [
                    {"role": "system", "content": "be an auditor"},
                    {"role": "user", "content": "audit this"},
                ]
            })))
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"content": "ok"}}]}"#)
            .create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &test_config(&server.url()))
            .unwrap();
        client.complete("be an auditor", "audit this").unwrap();
        mock.assert();
    }

    #[test]
    fn complete_fails_on_api_error_status() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/").with_status(500).with_body("boom").create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &test_config(&server.url()))
            .unwrap();
        let err = client.complete("s", "u").unwrap_err();
        assert!(err.to_string().contains("API error (500)"));
    }

    #[test]
    fn complete_fails_on_empty_choices() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/").with_status(200).with_body(r#"{"choices": []}"#).create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &test_config(&server.url()))
            .unwrap();
        let err = client.complete("s", "u").unwrap_err();
        assert!(err.to_string().contains("No completion choices"));
    }

    #[test]
    fn failures_surface_as_sentinel_text_through_get_completion() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/").with_status(401).with_body("bad key").create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &test_config(&server.url()))
            .unwrap();
        let text = get_completion(&client, "s", "u");
        assert!(text.starts_with("Error generating response: API error (401)"));
    }

    #[test]
    #[serial]
    fn from_env_requires_api_key() {
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }
        assert!(HttpCompletionClient::from_env().is_err());

        unsafe {
            std::env::set_var("OPENAI_API_KEY", "test-key");
        }
        let client = HttpCompletionClient::from_env().unwrap();
        assert!(format!("{:?}", client).contains("[REDACTED]"));
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }
    }
}
