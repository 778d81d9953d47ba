//! Video id extraction from the URL forms people actually paste.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

// Watch, share and shorts forms, in the order they are tried.
static ID_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"v=([\w-]{11})").expect("valid pattern"),
        Regex::new(r"youtu\.be/([\w-]{11})").expect("valid pattern"),
        Regex::new(r"/shorts/([\w-]{11})").expect("valid pattern"),
    ]
});

/// Extract the 11-character video id from a YouTube URL.
///
/// Falls back to reading the `v` query parameter verbatim, which catches
/// ids the canonical patterns reject.
pub fn extract_video_id(url: &str) -> Option<String> {
    let url = url.trim();
    for pattern in ID_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(url) {
            return captures.get(1).map(|m| m.as_str().to_string());
        }
    }

    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}
