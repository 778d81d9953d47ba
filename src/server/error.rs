//! Server-side errors: the lifecycle kind and the per-request kind that
//! maps onto contract responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::SummaryResponse;
use crate::summarize::SummarizeError;

/// Errors the API reports to clients.
///
/// Each variant becomes a contract body `{"status": …, "error": …}` whose
/// status mirrors the transport status of the response carrying it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request carried no usable URL.
    #[error("No URL provided")]
    NoUrl,
    /// The video exists but nothing summarizable came out of it.
    #[error("Could not generate summary")]
    NoSummary,
    /// The pipeline itself failed.
    #[error("{0}")]
    Pipeline(SummarizeError),
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        if err.is_unusable_video() {
            ApiError::NoSummary
        } else {
            ApiError::Pipeline(err)
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoUrl => StatusCode::BAD_REQUEST,
            ApiError::NoSummary => StatusCode::NOT_FOUND,
            ApiError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = SummaryResponse::Failure {
            status: status.as_u16(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Errors from running the server itself, as opposed to serving a request.
#[derive(Debug, Error)]
pub enum ServerError {
    /// [`run`](crate::server::SummarizeServer::run) was called on a server
    /// that never bound a listener.
    #[error("server must be bound before it can run")]
    NotBound,
    /// The listener failed while serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
