//! REST API error types
//!
//! These errors produce the wire shape the admin UI and widget expect:
//! a JSON `{"success": false, "message": "..."}` body with an appropriate
//! HTTP status code.

use crate::services::{AnnouncementError, ChatError, KnowledgeError};

use kb_core::CoreError;
use kb_db::DbError;
use kb_gemini::GeminiError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced entity absent (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Bad input shape or content (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed or missing API key (400)
    #[error("Config error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Completion API failed or returned garbage (502)
    #[error("Upstream error: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// Completion API quota exhausted or rate limited (503)
    #[error("Upstream unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Uncategorized (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ApiError::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Config { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Upstream { message, .. } => (StatusCode::BAD_GATEWAY, message),
            ApiError::Unavailable { message, .. } => (StatusCode::SERVICE_UNAVAILABLE, message),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            Json(ApiErrorResponse {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid id format: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Raw database detail never reaches the client
        log::error!("Database error: {}", e);

        match e {
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Classify completion failures: key problems are the caller's to fix (400),
/// quota exhaustion asks the caller to retry later (503), everything else is
/// the upstream's fault (502).
impl From<GeminiError> for ApiError {
    #[track_caller]
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::InvalidKey { message, .. } => ApiError::Config {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            GeminiError::RateLimited { message, .. } => ApiError::Unavailable {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::Upstream {
                message: other.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<ChatError> for ApiError {
    #[track_caller]
    fn from(e: ChatError) -> Self {
        let message = e.to_string();
        match e {
            ChatError::EmptyMessage => ApiError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            ChatError::MissingApiKey => ApiError::Config {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            ChatError::Completion(inner) => inner.into(),
        }
    }
}

impl From<KnowledgeError> for ApiError {
    #[track_caller]
    fn from(e: KnowledgeError) -> Self {
        match e {
            KnowledgeError::Validation(inner) => inner.into(),
            KnowledgeError::NotFound { id } => ApiError::NotFound {
                message: format!("Knowledge entry {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            },
            KnowledgeError::Db(inner) => inner.into(),
        }
    }
}

impl From<AnnouncementError> for ApiError {
    #[track_caller]
    fn from(e: AnnouncementError) -> Self {
        match e {
            AnnouncementError::Validation(inner) => inner.into(),
            AnnouncementError::Db(inner) => inner.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
