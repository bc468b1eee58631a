//! Backend dispatch.

use crate::client::GeminiClient;
use crate::error::Result;
use crate::mock::MockCompletion;

/// A completion backend the chat service can call.
///
/// Closed set of variants; `Mock` stands in for the network in tests.
#[derive(Debug, Clone)]
pub enum CompletionClient {
    Gemini(GeminiClient),
    Mock(MockCompletion),
}

impl CompletionClient {
    pub async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        match self {
            CompletionClient::Gemini(client) => client.generate(api_key, prompt).await,
            CompletionClient::Mock(mock) => mock.generate(api_key, prompt).await,
        }
    }
}
