//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crosscheck::{CrosscheckError, ValidationResult};
use serde::Serialize;
use serde_json::json;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client.
    BadRequest(String),
    /// Strings rows failed cross-validation on save.
    ValidationFailed(ValidationResult),
    /// Error from the crosscheck library.
    Crosscheck(CrosscheckError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

const UNDETECTED_MESSAGE: &str =
    "Could not detect CSV type from headers. Please specify the type manually.";

fn error_body(status: StatusCode, error: &str, message: String) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::ValidationFailed(result) => {
                (StatusCode::BAD_REQUEST, Json(result)).into_response()
            }
            ApiError::Crosscheck(err) => {
                let message = err.to_string();
                match err {
                    CrosscheckError::SchemaUndetected {
                        received_headers,
                        expected_strings,
                        expected_classifications,
                    } => (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "error": "schema_undetected",
                            "message": UNDETECTED_MESSAGE,
                            "receivedHeaders": received_headers,
                            "expected": {
                                "strings": expected_strings,
                                "classifications": expected_classifications,
                            },
                        })),
                    )
                        .into_response(),
                    CrosscheckError::Decode { .. } => {
                        error_body(StatusCode::BAD_REQUEST, "decode_error", message)
                    }
                    CrosscheckError::MalformedCsv { .. } => {
                        error_body(StatusCode::BAD_REQUEST, "malformed_csv", message)
                    }
                    CrosscheckError::InvalidHint(_) => {
                        error_body(StatusCode::BAD_REQUEST, "invalid_type", message)
                    }
                    CrosscheckError::Io { .. } => {
                        tracing::error!(error = %message, "io failure while handling request");
                        error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
                    }
                }
            }
        }
    }
}

impl From<CrosscheckError> for ApiError {
    fn from(err: CrosscheckError) -> Self {
        ApiError::Crosscheck(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::ValidationFailed(result) => {
                write!(f, "Validation failed: {} invalid rows", result.error_count())
            }
            ApiError::Crosscheck(e) => write!(f, "Crosscheck error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
