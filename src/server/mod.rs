//! HTTP boundary for the question-generation service

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use handlers::AppState;
pub use routes::router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::annotate::client::Annotate;
use crate::core::error::Result;

/// Bind and serve the API until the process exits
pub async fn serve(addr: SocketAddr, annotator: Arc<dyn Annotate>) -> Result<()> {
    let state = AppState::new(annotator);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "genquest listening");
    axum::serve(listener, app).await?;
    Ok(())
}
