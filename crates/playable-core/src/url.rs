//! URL recognition and builders
//!
//! Provider dispatch, media-id extraction and the handful of fixed URL
//! shapes the providers require. The watermark-free playback host is
//! deliberately a single named constant: it tracks an upstream API version
//! and changes without notice.

use regex::Regex;

use crate::error::{ExtractError, Result};

/// Base of the watermark-free playback endpoint (host and API version are
/// upstream-controlled; update here only)
pub const PLAYBACK_URL_BASE: &str = "https://api2-16-h2.musical.ly/aweme/v1/play/";

/// Fixed playback flags appended to every watermark-free URL
const PLAYBACK_QUERY_SUFFIX: &str =
    "vr_type=0&is_play_url=1&source=PackSourceEnum_PUBLISH&media_type=4";

/// A supported media provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    JioSaavn,
    TikTok,
}

impl Provider {
    /// Matches a page URL against the supported provider URL shapes
    pub fn for_url(url: &str) -> Option<Provider> {
        let jiosaavn = Regex::new(
            r"^https?://(?:www\.)?(?:jiosaavn\.com/song/[^/]+/|saavn\.com/s/song/(?:[^/]+/){3})\w+",
        )
        .ok()?;
        if jiosaavn.is_match(url) {
            return Some(Provider::JioSaavn);
        }

        let tiktok = Regex::new(r"^https?://(?:www\.)?tiktok\.com/@[^/]+/video/\d+").ok()?;
        if tiktok.is_match(url) {
            return Some(Provider::TikTok);
        }

        None
    }
}

/// Extracts the song id from a JioSaavn/Saavn page URL path
///
/// Host-agnostic on purpose: tests point the extractor at a local mock
/// server while keeping the real path shape.
pub fn song_id_from_url(url: &str) -> Option<String> {
    let re = Regex::new(r"/(?:song/[^/]+|s/song/(?:[^/]+/){2}[^/]+)/(\w+)(?:[?#]|$)").ok()?;
    re.captures(url).map(|caps| caps[1].to_string())
}

/// Extracts the numeric video id from a TikTok page URL
pub fn video_id_from_url(url: &str) -> Option<String> {
    let re = Regex::new(r"/@[^/]+/video/(\d+)").ok()?;
    re.captures(url).map(|caps| caps[1].to_string())
}

/// Derives the media id for a URL, failing with `UnsupportedUrl`
pub fn media_id_for(provider: Provider, url: &str) -> Result<String> {
    let id = match provider {
        Provider::JioSaavn => song_id_from_url(url),
        Provider::TikTok => video_id_from_url(url),
    };
    id.ok_or_else(|| ExtractError::UnsupportedUrl(url.to_string()))
}

/// Builds a URL-encoded form body from key/value pairs
///
/// Key order is preserved as given.
pub fn build_form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the direct watermark-free playback URL for an asset identifier
pub fn build_playback_url(video_id: &str) -> String {
    format!(
        "{}?video_id={}&{}",
        PLAYBACK_URL_BASE,
        urlencoding::encode(video_id),
        PLAYBACK_QUERY_SUFFIX
    )
}
