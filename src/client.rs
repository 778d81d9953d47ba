//! HTTP client for the summarize backend.

use reqwest::Client;
use thiserror::Error;

use crate::api::{SummarizeRequest, SummaryResponse};

/// Failures between "request sent" and "contract body in hand".
///
/// Both variants mean the same thing to callers: no usable reply arrived.
/// The split only records which phase gave out.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response came back.
    #[error(transparent)]
    Http(reqwest::Error),
    /// A response arrived but its body was not a contract payload.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the summarize API.
///
/// Carries no request timeout: a submission waits as long as the transport
/// does, and nothing cancels it midway.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .build()
            .expect("failed to build http client");
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the URL to `/summarize` and decode the status-tagged reply.
    ///
    /// The transport status is never consulted: the backend mirrors it into
    /// the body's `status` field, and that field is the contract.
    pub async fn summarize(&self, url: &str) -> Result<SummaryResponse, ClientError> {
        let endpoint = format!("{}/summarize", self.base_url);
        tracing::debug!(url = %url, endpoint = %endpoint, "sending summarize request");

        let response = self
            .client
            .post(&endpoint)
            .json(&SummarizeRequest { url: url.to_string() })
            .send()
            .await
            .map_err(ClientError::Http)?;

        let reply = response
            .json::<SummaryResponse>()
            .await
            .map_err(ClientError::Decode)?;

        tracing::debug!(status = reply.status(), "summarize response decoded");
        Ok(reply)
    }
}
