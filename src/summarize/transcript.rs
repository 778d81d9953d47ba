//! Transcript retrieval through YouTube's caption tracks.
//!
//! The watch page embeds a player-response JSON blob that lists the
//! available caption tracks. Requesting a track URL with `fmt=json3`
//! returns the captions as a JSON event stream instead of the legacy XML.

use reqwest::Client;
use serde::Deserialize;

use super::SummarizeError;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const CAPTION_TRACKS_KEY: &str = "\"captionTracks\":";

/// One caption track from the player response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    /// "asr" marks auto-generated tracks; manual tracks have no kind.
    #[serde(default)]
    kind: Option<String>,
    /// YouTube can machine-translate this track into other languages.
    #[serde(default)]
    is_translatable: bool,
}

#[derive(Debug, Deserialize)]
struct TrackBody {
    #[serde(default)]
    events: Vec<TrackEvent>,
}

#[derive(Debug, Deserialize)]
struct TrackEvent {
    #[serde(default)]
    segs: Option<Vec<TrackSeg>>,
}

#[derive(Debug, Deserialize)]
struct TrackSeg {
    #[serde(default)]
    utf8: String,
}

/// Fetches caption text for a video, preferring the configured language.
pub struct TranscriptFetcher {
    client: Client,
    language: String,
}

impl TranscriptFetcher {
    pub fn new(language: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("tldw/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build http client");
        Self {
            client,
            language: language.into(),
        }
    }

    /// Fetch the transcript as text chunks, one per caption event.
    pub async fn fetch(&self, video_id: &str) -> Result<Vec<String>, SummarizeError> {
        let watch_url = format!("{WATCH_URL}{video_id}");
        let page = self.client.get(&watch_url).send().await?.text().await?;

        let tracks = extract_caption_tracks(&page)?;
        let track = choose_track(&tracks, &self.language).ok_or(SummarizeError::NoTranscript)?;
        tracing::debug!(
            language = %track.language_code,
            generated = track.kind.is_some(),
            translatable = track.is_translatable,
            "caption track selected"
        );

        let track_url = track_request_url(track, &self.language);
        let body = self.client.get(&track_url).send().await?.text().await?;
        let parsed: TrackBody = serde_json::from_str(&body)
            .map_err(|err| SummarizeError::Parse(format!("caption track body: {err}")))?;

        Ok(collect_chunks(parsed))
    }
}

/// Pull the `captionTracks` array out of the embedded player response.
///
/// The watch page is megabytes of markup, so instead of parsing all of it
/// we locate the key and let the deserializer stop at the end of the array,
/// ignoring whatever follows.
fn extract_caption_tracks(page: &str) -> Result<Vec<CaptionTrack>, SummarizeError> {
    let Some(position) = page.find(CAPTION_TRACKS_KEY) else {
        return Err(SummarizeError::NoTranscript);
    };
    let rest = &page[position + CAPTION_TRACKS_KEY.len()..];

    let mut deserializer = serde_json::Deserializer::from_str(rest);
    Vec::<CaptionTrack>::deserialize(&mut deserializer)
        .map_err(|err| SummarizeError::Parse(format!("caption track list: {err}")))
}

/// Exact language match first (manual before auto-generated), then any
/// track at all.
fn choose_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.language_code == language && t.kind.is_none())
        .or_else(|| tracks.iter().find(|t| t.language_code == language))
        .or_else(|| tracks.first())
}

/// Track URL in json3 form. A track in another language is requested as a
/// machine translation (`tlang`) when YouTube offers one; otherwise it is
/// fetched as-is.
fn track_request_url(track: &CaptionTrack, language: &str) -> String {
    let mut url = format!("{}&fmt=json3", track.base_url);
    if track.language_code != language && track.is_translatable {
        url.push_str("&tlang=");
        url.push_str(language);
    }
    url
}

fn collect_chunks(body: TrackBody) -> Vec<String> {
    body.events
        .into_iter()
        .filter_map(|event| event.segs)
        .map(|segs| segs.into_iter().map(|seg| seg.utf8).collect::<String>())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}
