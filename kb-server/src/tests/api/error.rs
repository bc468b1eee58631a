use crate::ApiError;
use crate::services::ChatError;

use kb_gemini::GeminiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Knowledge entry not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Knowledge entry not found");
}

#[tokio::test]
async fn test_validation_error_returns_400() {
    let error = ApiError::Validation {
        message: "Category cannot be empty".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Category cannot be empty");
}

#[tokio::test]
async fn test_config_error_returns_400() {
    let error = ApiError::Config {
        message: "API key cannot be empty".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "API key cannot be empty");
}

#[tokio::test]
async fn test_upstream_error_returns_502() {
    let error = ApiError::Upstream {
        message: "HTTP 500: internal error".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_unavailable_error_returns_503() {
    let error = ApiError::Unavailable {
        message: "Resource has been exhausted".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Database operation failed");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    match api_err {
        ApiError::Validation { message, .. } => {
            assert!(message.contains("Invalid id format"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_invalid_key_converts_to_config() {
    let gemini_err = GeminiError::InvalidKey {
        message: "API key not valid".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = gemini_err.into();

    match api_err {
        ApiError::Config { message, .. } => {
            assert_eq!(message, "API key not valid");
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_rate_limited_converts_to_unavailable() {
    let gemini_err = GeminiError::RateLimited {
        message: "Resource has been exhausted".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = gemini_err.into();

    assert!(matches!(api_err, ApiError::Unavailable { .. }));
}

#[test]
fn test_empty_completion_converts_to_upstream() {
    let gemini_err = GeminiError::EmptyResponse {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = gemini_err.into();

    match api_err {
        // Location detail stays out of the client-facing message
        ApiError::Upstream { message, .. } => {
            assert_eq!(message, "Empty completion response");
        }
        _ => panic!("Expected Upstream error"),
    }
}

#[test]
fn test_chat_empty_message_converts_to_validation() {
    let api_err: ApiError = ChatError::EmptyMessage.into();

    match api_err {
        ApiError::Validation { message, .. } => {
            assert_eq!(message, "Message cannot be empty");
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_chat_missing_key_converts_to_config() {
    let api_err: ApiError = ChatError::MissingApiKey.into();

    match api_err {
        ApiError::Config { message, .. } => {
            assert_eq!(message, "No API key configured");
        }
        _ => panic!("Expected Config error"),
    }
}
