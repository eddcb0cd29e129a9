//! API error types and response mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("Request body has no 'blurb' key")]
    MissingBlurb,

    #[error("Passage of {chars} characters exceeds the limit of {limit}")]
    PassageTooLarge { chars: usize, limit: usize },

    #[error("Annotation service error: {0}")]
    Annotator(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "invalid_body"),
            ApiError::MissingBlurb => (StatusCode::UNPROCESSABLE_ENTITY, "missing_blurb"),
            ApiError::PassageTooLarge { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "passage_too_large")
            }
            ApiError::Annotator(_) => (StatusCode::BAD_GATEWAY, "annotator_error"),
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for handler functions
pub type ApiResult<T> = Result<T, ApiError>;
