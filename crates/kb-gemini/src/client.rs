//! HTTP client for the `generateContent` endpoint.
//!
//! All wire types are private to this module. Callers pass a prompt and get
//! back the first candidate's text, trimmed. The API key travels as a query
//! parameter per request rather than living in the client, so a key swap
//! never requires rebuilding the client.

use crate::error::{GeminiError, Result};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, error};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_base_url: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from config values.
    ///
    /// Constructed once at startup, then cheaply cloned because
    /// `reqwest::Client` is an `Arc` internally.
    pub fn new(api_base_url: String, model: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GeminiError::Client {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            client,
            api_base_url,
            model,
        })
    }

    /// Send `prompt` as a single-turn request and return the first
    /// candidate's text.
    ///
    /// One round trip, no conversation state. The caller owns prompt
    /// assembly and retry policy.
    pub async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            self.model
        );

        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(
            "sending completion request: model={} prompt_len={}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("completion request failed (transport): {e}");
                GeminiError::request(e.to_string())
            })?;

        let response = check_status(response).await?;

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                error!("failed to deserialize completion response: {e}");
                GeminiError::request(format!("failed to parse response body: {e}"))
            })?;

        debug!(
            "received completion response: candidates={}",
            parsed.candidates.len()
        );

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GeminiError::EmptyResponse {
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

// Wire types for the generateContent endpoint.

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

// Error envelope returned on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Consume the response and return it if successful, or a classified error.
///
/// 400/401/403 all indicate a key problem in practice (the API reports a
/// malformed key as 400 INVALID_ARGUMENT). 429 is quota exhaustion.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());

    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => format!("HTTP {status}: {body}"),
    };

    error!("completion request returned HTTP {status}: {message}");

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(GeminiError::InvalidKey {
                message,
                location: ErrorLocation::from(Location::caller()),
            })
        }
        StatusCode::TOO_MANY_REQUESTS => Err(GeminiError::RateLimited {
            message,
            location: ErrorLocation::from(Location::caller()),
        }),
        _ => Err(GeminiError::request(format!("HTTP {status}: {message}"))),
    }
}
