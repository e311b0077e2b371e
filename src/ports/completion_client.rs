//! Completion service port definition.

use crate::domain::AppError;

/// Port for the external text-completion service.
pub trait CompletionClient {
    /// Send a system/user prompt pair and return the completion text.
    fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AppError>;
}

/// Run a completion and collapse any failure into displayable text.
///
/// Downstream code always receives text, never an error: transport and
/// auth failures come back as a sentinel-prefixed string that the parser's
/// narrative fallback will carry through verbatim.
pub fn get_completion(client: &dyn CompletionClient, system_prompt: &str, user_prompt: &str) -> String {
    match client.complete(system_prompt, user_prompt) {
        Ok(text) => text,
        Err(err) => format!("Error generating response: {}", err),
    }
}

/// Mock client for testing without network calls.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient {
    /// Canned completion text returned for every request.
    pub response: String,
}

#[cfg(test)]
impl MockCompletionClient {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self { response: response.into() }
    }
}

#[cfg(test)]
impl CompletionClient for MockCompletionClient {
    fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String, AppError> {
        Ok(self.response.clone())
    }
}
