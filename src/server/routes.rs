//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::handlers::{self, AppState};

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/genquest", post(handlers::genquest))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
