//! Wire types for the summarize API.
//!
//! Every response body carries its own `status` field, and that field alone
//! decides whether the payload is a summary or an error. Decoding happens
//! once, here, so the rest of the crate only ever sees [`SummaryResponse`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Body of `POST /summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
}

/// Body of a `POST /summarize` response, in either direction.
///
/// `{"status": 200, "summary": …}` decodes to [`SummaryResponse::Success`],
/// any other `status` decodes to [`SummaryResponse::Failure`]. A payload
/// whose fields do not match its `status` tag is a decode error, never a
/// silently mis-picked variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryResponse {
    Success { summary: String },
    Failure { status: u16, error: String },
}

impl SummaryResponse {
    /// The `status` value carried in the body.
    pub fn status(&self) -> u16 {
        match self {
            Self::Success { .. } => 200,
            Self::Failure { status, .. } => *status,
        }
    }
}

/// Flat wire shape behind [`SummaryResponse`].
#[derive(Serialize, Deserialize)]
struct RawResponse {
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for SummaryResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = match self {
            Self::Success { summary } => RawResponse {
                status: 200,
                summary: Some(summary.clone()),
                error: None,
            },
            Self::Failure { status, error } => RawResponse {
                status: *status,
                summary: None,
                error: Some(error.clone()),
            },
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SummaryResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawResponse::deserialize(deserializer)?;
        match raw.status {
            200 => {
                let summary = raw.summary.ok_or_else(|| D::Error::missing_field("summary"))?;
                Ok(Self::Success { summary })
            }
            status => {
                let error = raw.error.ok_or_else(|| D::Error::missing_field("error"))?;
                Ok(Self::Failure { status, error })
            }
        }
    }
}
