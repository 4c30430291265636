//! Output data model for media extraction
//!
//! All types are plain data with Serialize/Deserialize so callers can pass
//! results across process or IPC boundaries unchanged.

use serde::{Deserialize, Serialize};

/// Kind of media a resolved URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Audio,
    Video,
}

/// A directly fetchable media URL produced by secondary resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMedia {
    /// Direct, playable URL
    pub direct_url: String,
    /// Whether the URL points at audio or video
    pub kind: ContentKind,
    /// File extension of the media ("mp3", "mp4")
    pub ext: String,
}

/// One playable format entry in an extraction result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFormat {
    /// Direct media URL
    pub url: String,

    /// File extension (e.g. "mp3")
    pub ext: String,

    /// Human-readable note (e.g. "MPEG audio")
    pub format_note: String,

    /// Format identifier (e.g. the bitrate code "128")
    pub format_id: String,

    /// Video codec tag; "none" marks an audio-only format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcodec: Option<String>,

    /// Audio codec tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acodec: Option<String>,
}

impl MediaFormat {
    /// Builds an audio-only format entry (`vcodec: "none"`)
    pub fn audio(url: impl Into<String>, ext: &str, note: &str, format_id: &str) -> Self {
        Self {
            url: url.into(),
            ext: ext.to_string(),
            format_note: note.to_string(),
            format_id: format_id.to_string(),
            vcodec: Some("none".to_string()),
            acodec: None,
        }
    }

    /// Builds a video format entry (codecs unknown at extraction time)
    pub fn video(url: impl Into<String>, ext: &str, note: &str, format_id: &str) -> Self {
        Self {
            url: url.into(),
            ext: ext.to_string(),
            format_note: note.to_string(),
            format_id: format_id.to_string(),
            vcodec: None,
            acodec: None,
        }
    }
}

/// Normalized result of one extraction call
///
/// Built once by the provider flow and never mutated afterwards. Headers
/// required to replay the media fetch (some providers gate the direct URL
/// behind a specific User-Agent) are carried in `http_headers` rather than
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Media identifier
    pub id: String,

    /// Title of the media
    pub title: String,

    /// Extension of the primary format
    pub ext: String,

    /// Playable formats, best first
    pub formats: Vec<MediaFormat>,

    /// Album name, when the provider exposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Thumbnail URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Headers the media fetch must replay (empty for most providers)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_headers: Vec<(String, String)>,
}

/// A listing of extraction results for one creator/user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Listing identifier (usually the user id)
    pub id: String,

    /// Successfully extracted entries; failed entries are skipped
    pub entries: Vec<ExtractionResult>,
}
