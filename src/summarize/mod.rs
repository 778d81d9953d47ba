//! Transcript-based summarization pipeline.

mod textrank;
mod transcript;
mod video_id;

pub use textrank::summarize_text;
pub use transcript::TranscriptFetcher;
pub use video_id::extract_video_id;

use async_trait::async_trait;
use thiserror::Error;

/// Failures from the summarization pipeline.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("could not extract a video id from '{0}'")]
    InvalidUrl(String),
    #[error("no transcript available")]
    NoTranscript,
    #[error("summary came back empty")]
    EmptySummary,
    #[error("transcript fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("transcript parse failed: {0}")]
    Parse(String),
}

impl SummarizeError {
    /// True when the video simply cannot be summarized, as opposed to the
    /// pipeline itself breaking.
    pub fn is_unusable_video(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::NoTranscript | Self::EmptySummary
        )
    }
}

/// Summarization seam between the HTTP layer and the pipeline.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a summary for the given video URL.
    async fn summarize(&self, url: &str) -> Result<String, SummarizeError>;
}

/// The production pipeline: video id, caption transcript, TextRank.
pub struct TranscriptSummarizer {
    fetcher: TranscriptFetcher,
    max_sentences: usize,
}

impl TranscriptSummarizer {
    pub fn new(language: impl Into<String>, max_sentences: usize) -> Self {
        Self {
            fetcher: TranscriptFetcher::new(language),
            max_sentences,
        }
    }
}

#[async_trait]
impl Summarizer for TranscriptSummarizer {
    async fn summarize(&self, url: &str) -> Result<String, SummarizeError> {
        let video_id =
            extract_video_id(url).ok_or_else(|| SummarizeError::InvalidUrl(url.to_string()))?;
        tracing::debug!(video_id = %video_id, "fetching transcript");

        let chunks = self.fetcher.fetch(&video_id).await?;
        if chunks.is_empty() {
            return Err(SummarizeError::NoTranscript);
        }

        let transcript = chunks.join(" ");
        let summary = summarize_text(&transcript, self.max_sentences);
        if summary.is_empty() {
            return Err(SummarizeError::EmptySummary);
        }

        tracing::debug!(
            transcript_chars = transcript.len(),
            summary_chars = summary.len(),
            "summary generated"
        );
        Ok(summary)
    }
}
