//! Route handlers for the summarize API.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use super::error::ApiError;
use crate::api::{SummarizeRequest, SummaryResponse};
use crate::summarize::Summarizer;

/// State shared by all routes: the injected summarizer.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(summarize))
        .route("/health", get(health))
        .with_state(state)
}

/// `POST /summarize`.
///
/// The body is read leniently: anything that is not a JSON object with a
/// `url` string is treated as an empty URL and answered with the contract's
/// 400, never with a framework-shaped rejection.
async fn summarize(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    let url = serde_json::from_slice::<SummarizeRequest>(&body)
        .map(|request| request.url.trim().to_string())
        .unwrap_or_default();

    if url.is_empty() {
        tracing::warn!(%request_id, "summarize request without a url");
        return ApiError::NoUrl.into_response();
    }

    tracing::info!(%request_id, url = %url, "summarize request received");
    match state.summarizer.summarize(&url).await {
        Ok(summary) => {
            tracing::info!(%request_id, summary_chars = summary.len(), "summary generated");
            Json(SummaryResponse::Success { summary }).into_response()
        }
        Err(err) if err.is_unusable_video() => {
            tracing::warn!(%request_id, error = %err, "video cannot be summarized");
            ApiError::from(err).into_response()
        }
        Err(err) => {
            tracing::error!(%request_id, error = %err, "summarization failed");
            ApiError::from(err).into_response()
        }
    }
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    service: &'static str,
}

/// `GET /health`.
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "tldw",
    })
}
