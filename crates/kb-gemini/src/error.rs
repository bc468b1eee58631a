use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    /// The upstream rejected the credential (HTTP 400/401/403).
    #[error("Invalid API key: {message} {location}")]
    InvalidKey {
        message: String,
        location: ErrorLocation,
    },

    /// Quota exhausted or rate limited (HTTP 429).
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Transport failure or an unclassified upstream status.
    #[error("Completion request failed: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    /// Success response carrying no usable candidate text.
    #[error("Empty completion response {location}")]
    EmptyResponse { location: ErrorLocation },

    /// HTTP client construction failed.
    #[error("Failed to build HTTP client: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },
}

impl GeminiError {
    #[track_caller]
    pub(crate) fn request<S: Into<String>>(message: S) -> Self {
        GeminiError::Request {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The failure detail without the source location, for client-facing
    /// messages.
    pub fn message(&self) -> &str {
        match self {
            GeminiError::InvalidKey { message, .. }
            | GeminiError::RateLimited { message, .. }
            | GeminiError::Request { message, .. }
            | GeminiError::Client { message, .. } => message,
            GeminiError::EmptyResponse { .. } => "Empty completion response",
        }
    }
}

pub type Result<T> = std::result::Result<T, GeminiError>;
