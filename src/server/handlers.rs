//! Request handlers for the question-generation API

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::annotate::client::Annotate;
use crate::core::config;
use crate::grammar::QuestionGenerator;
use crate::server::error::{ApiError, ApiResult};

/// Shared state for all handlers
///
/// The annotator is the process-wide read-only collaborator; concurrent
/// requests share it without synchronization because it is never mutated
/// after startup.
#[derive(Clone)]
pub struct AppState {
    pub annotator: Arc<dyn Annotate>,
    started: Instant,
}

impl AppState {
    pub fn new(annotator: Arc<dyn Annotate>) -> Self {
        Self {
            annotator,
            started: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Generate questions for a passage
///
/// `POST /genquest` with `{"blurb": "..."}` returns
/// `201 {"questions": [...]}`. A non-JSON body is 400, a body without
/// the `blurb` key is 422, an oversized passage is 422, and an
/// unreachable annotator is 502.
pub async fn genquest(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<QuestionsResponse>)> {
    let Json(value) = body.map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    let blurb = value
        .get("blurb")
        .and_then(Value::as_str)
        .ok_or(ApiError::MissingBlurb)?;

    let limit = config().max_passage_chars;
    let chars = blurb.chars().count();
    if chars > limit {
        return Err(ApiError::PassageTooLarge { chars, limit });
    }

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, chars, "generating questions");

    let generator = QuestionGenerator::generate(state.annotator.as_ref(), blurb)
        .await
        .map_err(|e| ApiError::Annotator(e.to_string()))?;

    let questions: Vec<String> = generator.questions().iter().map(|q| q.text()).collect();
    tracing::info!(%request_id, count = questions.len(), "questions generated");

    Ok((StatusCode::CREATED, Json(QuestionsResponse { questions })))
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}
