//! Canned completion backend for tests.
//!
//! Returns a fixed reply (or a fixed failure) and records every prompt it
//! receives, so tests can assert both on what the assistant answered and on
//! what actually went over the wire.

use crate::error::{GeminiError, Result};

use std::panic::Location;
use std::sync::{Arc, Mutex};

use error_location::ErrorLocation;

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(String),
}

#[derive(Debug, Clone)]
pub struct MockCompletion {
    reply: MockReply,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCompletion {
    /// A backend that answers every prompt with `text`.
    pub fn replying<S: Into<String>>(text: S) -> Self {
        Self {
            reply: MockReply::Text(text.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A backend that fails every prompt with a request error.
    pub fn failing<S: Into<String>>(message: S) -> Self {
        Self {
            reply: MockReply::Failure(message.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn generate(&self, _api_key: &str, prompt: &str) -> Result<String> {
        self.lock_calls().push(prompt.to_string());

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Failure(message) => Err(GeminiError::Request {
                message: message.clone(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Number of prompts sent so far.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Every prompt sent so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.lock_calls().clone()
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}
