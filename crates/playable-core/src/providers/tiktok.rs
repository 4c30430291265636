//! TikTok video flow
//!
//! The provider serves a watermarked decoy as the first playable URL; the
//! watermark-free asset id is embedded as plain text inside that decoy's
//! byte stream. Single-video extraction and user-listing extraction are
//! two distinct operations.

use serde_json::Value;

use crate::client::MediaClient;
use crate::error::{ExtractError, Result};
use crate::navigate::{first_str, require, require_first_str, require_str};
use crate::parser::blob::NEXT_DATA;
use crate::parser::scan::{IDENTIFIER_MARKER, scan_identifier, scan_og_tag};
use crate::types::{ContentKind, ExtractionResult, MediaFormat, Playlist, ResolvedMedia};
use crate::url::{build_playback_url, video_id_from_url};

/// The playback endpoint rejects browser user agents; any media fetch has
/// to replay this one.
const REPLAY_USER_AGENT: &str = "okhttp";

/// Endpoints the video flow talks to, overridable for tests
#[derive(Debug, Clone)]
pub struct TikTokEndpoints {
    /// Base of the mobile page host serving the embedded data
    pub page_base: String,
    /// Base of the share-listing API host
    pub api_base: String,
}

impl Default for TikTokEndpoints {
    fn default() -> Self {
        Self {
            page_base: "https://m.tiktok.com".to_string(),
            api_base: "https://m.tiktok.com".to_string(),
        }
    }
}

/// Extractor for TikTok video pages and user listings
pub struct TikTokExtractor {
    client: MediaClient,
    endpoints: TikTokEndpoints,
}

impl TikTokExtractor {
    pub fn new(client: MediaClient) -> Self {
        Self::with_endpoints(client, TikTokEndpoints::default())
    }

    pub fn with_endpoints(client: MediaClient, endpoints: TikTokEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Resolves a video page URL into a watermark-free playback URL
    ///
    /// The result id is the recovered watermark-free asset identifier, and
    /// `http_headers` carries the User-Agent the media fetch must replay.
    ///
    /// # Errors
    /// - `UnsupportedUrl` when the URL does not carry a video id
    /// - `NotFound` when the embedded data tag is absent
    /// - `MissingField` when the watermarked URL or title is missing
    /// - `IdentifierNotFound` when the decoy holds no embedded id
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        let media_id =
            video_id_from_url(url).ok_or_else(|| ExtractError::UnsupportedUrl(url.to_string()))?;

        let page_url = format!("{}/v/{}.html", self.endpoints.page_base, media_id);
        tracing::debug!(%media_id, "fetching video page");
        let page = self.client.get(&page_url).await?;

        let blob = NEXT_DATA.extract(&page)?;
        let tree: Value = serde_json::from_str(blob)?;
        let watermarked_url = require_first_str(
            &tree,
            &["props", "pageProps", "videoData", "itemInfos", "video", "urls"],
        )?;

        let (asset_id, resolved) = self.scan_watermark_free(watermarked_url).await?;

        let title = scan_og_tag(&page, "og:title")
            .ok_or_else(|| ExtractError::MissingField("og:title".to_string()))?;
        let description = scan_og_tag(&page, "og:description");

        Ok(ExtractionResult {
            id: asset_id,
            title,
            ext: resolved.ext.clone(),
            formats: vec![MediaFormat::video(
                resolved.direct_url,
                &resolved.ext,
                "watermark-free",
                "play",
            )],
            album: None,
            thumbnail: None,
            description,
            http_headers: vec![("User-Agent".to_string(), REPLAY_USER_AGENT.to_string())],
        })
    }

    /// Fetches the decoy and turns its embedded id into a direct URL
    async fn scan_watermark_free(&self, watermarked_url: &str) -> Result<(String, ResolvedMedia)> {
        tracing::debug!(url = watermarked_url, "scanning decoy for asset identifier");
        let decoy = self.client.get(watermarked_url).await?;

        let asset_id = scan_identifier(&decoy)
            .ok_or_else(|| ExtractError::IdentifierNotFound(IDENTIFIER_MARKER.to_string()))?;
        let direct_url = build_playback_url(asset_id);

        Ok((
            asset_id.to_string(),
            ResolvedMedia {
                direct_url,
                kind: ContentKind::Video,
                ext: "mp4".to_string(),
            },
        ))
    }

    /// Fetches a user's video listing
    ///
    /// A failed entry is logged and skipped; one broken video never aborts
    /// the whole listing.
    pub async fn user_videos(&self, user_id: &str) -> Result<Playlist> {
        if user_id.trim().is_empty() {
            return Err(ExtractError::InvalidId(
                "user ID cannot be empty".to_string(),
            ));
        }

        let list_url = format!(
            "{}/h5/share/usr/list/{}/",
            self.endpoints.api_base, user_id
        );
        let body = self
            .client
            .get_with_query(&list_url, &[("_signature", "_")])
            .await?;
        let tree: Value = serde_json::from_str(&body)?;

        let list = require(&tree, &["aweme_list"])?
            .as_array()
            .ok_or_else(|| ExtractError::MissingField("aweme_list".to_string()))?;

        let mut entries = Vec::new();
        for aweme in list {
            match entry_from_aweme(aweme) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    tracing::warn!(%err, "skipping unextractable listing entry");
                }
            }
        }

        Ok(Playlist {
            id: user_id.to_string(),
            entries,
        })
    }
}

/// Maps one listing entry to an extraction result
fn entry_from_aweme(aweme: &Value) -> Result<ExtractionResult> {
    let id = require_str(aweme, &["aweme_id"])?;
    let title = require_str(aweme, &["desc"])?;
    let play_url = require_first_str(aweme, &["video", "play_addr", "url_list"])?;
    let thumbnail = first_str(aweme, &["video", "cover", "url_list"]).map(str::to_string);

    Ok(ExtractionResult {
        id: id.to_string(),
        title: title.to_string(),
        ext: "mp4".to_string(),
        formats: vec![MediaFormat::video(play_url, "mp4", "watermarked", "play_addr")],
        album: None,
        thumbnail,
        description: None,
        http_headers: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_from_aweme_complete() {
        let aweme = json!({
            "aweme_id": "6813765043914624262",
            "desc": "a video",
            "video": {
                "play_addr": { "url_list": ["http://play/1"] },
                "cover": { "url_list": ["http://cover/1"] }
            }
        });

        let entry = entry_from_aweme(&aweme).unwrap();
        assert_eq!(entry.id, "6813765043914624262");
        assert_eq!(entry.title, "a video");
        assert_eq!(entry.formats[0].url, "http://play/1");
        assert_eq!(entry.thumbnail.as_deref(), Some("http://cover/1"));
    }

    #[test]
    fn test_entry_from_aweme_missing_play_addr() {
        let aweme = json!({ "aweme_id": "1", "desc": "d", "video": {} });
        let err = entry_from_aweme(&aweme).unwrap_err();
        match err {
            ExtractError::MissingField(path) => {
                assert_eq!(path, "video.play_addr.url_list.0");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_entry_from_aweme_missing_cover_is_fine() {
        let aweme = json!({
            "aweme_id": "1",
            "desc": "d",
            "video": { "play_addr": { "url_list": ["http://play/1"] } }
        });
        let entry = entry_from_aweme(&aweme).unwrap();
        assert_eq!(entry.thumbnail, None);
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = TikTokEndpoints::default();
        assert_eq!(endpoints.page_base, "https://m.tiktok.com");
        assert_eq!(endpoints.api_base, "https://m.tiktok.com");
    }
}
