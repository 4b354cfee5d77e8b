#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Classified failures of the analysis pipeline.
///
/// Every error is surfaced to the caller verbatim with its classification —
/// no silent recovery, no partial-result fallback, no retry.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unsupported resume format: {0}")]
    UnsupportedFormat(String),

    #[error("document text extraction failed: {0}")]
    DocumentExtraction(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("GEMINI_API_KEY is not set")]
    MissingCredential,

    #[error("analysis service failure: {message}")]
    Service { status: Option<u16>, message: String },

    #[error("malformed analysis reply: {0}")]
    MalformedResponse(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Analysis(err) => classify(err),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

fn classify(err: &AnalysisError) -> (StatusCode, &'static str, String) {
    match err {
        AnalysisError::UnsupportedFormat(_) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_FORMAT",
            err.to_string(),
        ),
        AnalysisError::DocumentExtraction(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "DOCUMENT_EXTRACTION_FAILED",
            err.to_string(),
        ),
        AnalysisError::InvalidInput(_) => {
            (StatusCode::BAD_REQUEST, "INVALID_INPUT", err.to_string())
        }
        AnalysisError::MissingCredential => {
            tracing::error!("Analysis attempted without GEMINI_API_KEY configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MISSING_CREDENTIAL",
                err.to_string(),
            )
        }
        AnalysisError::Service { status, message } => {
            tracing::error!(upstream_status = ?status, "Analysis service failure: {message}");
            (StatusCode::BAD_GATEWAY, "SERVICE_ERROR", err.to_string())
        }
        AnalysisError::MalformedResponse(detail) => {
            tracing::error!("Malformed analysis reply: {detail}");
            (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE", err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_names_the_offending_type() {
        let err = AnalysisError::UnsupportedFormat("image/png".to_string());
        assert!(err.to_string().contains("image/png"));
    }

    #[test]
    fn test_service_error_carries_underlying_message() {
        let err = AnalysisError::Service {
            status: Some(503),
            message: "model overloaded".to_string(),
        };
        assert!(err.to_string().contains("model overloaded"));
    }
}
