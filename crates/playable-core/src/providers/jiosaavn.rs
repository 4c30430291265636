//! JioSaavn audio flow
//!
//! Session priming, page fetch, embedded-blob extraction and the token
//! exchange that trades the encrypted media reference for an authorized
//! direct URL. The stats ping is a prerequisite: without it the server
//! omits the data the token exchange needs.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::client::MediaClient;
use crate::error::{ExtractError, Result};
use crate::fingerprint;
use crate::navigate::{first_str, get_str, require, require_str};
use crate::parser::blob::{INITIAL_DATA, sanitize_blob};
use crate::parser::scan::scan_json_object;
use crate::types::{ContentKind, ExtractionResult, MediaFormat, ResolvedMedia};
use crate::url::{build_form_body, song_id_from_url};

const SESSION_EVENT: &str = "site:browser:fp";
const CLIENT_TAG: &str = "00000000";
const TOKEN_CALL: &str = "song.generateAuthToken";
const BITRATE_CODE: &str = "128";

/// Endpoints the audio flow talks to, overridable for tests
#[derive(Debug, Clone)]
pub struct SaavnEndpoints {
    /// Telemetry endpoint primed before the page fetch
    pub stats_url: String,
    /// RPC endpoint for the token exchange
    pub api_url: String,
}

impl Default for SaavnEndpoints {
    fn default() -> Self {
        Self {
            stats_url: "https://www.jiosaavn.com/stats.php".to_string(),
            api_url: "https://www.jiosaavn.com/api.php".to_string(),
        }
    }
}

/// Extractor for JioSaavn song pages
pub struct JioSaavnExtractor {
    client: MediaClient,
    endpoints: SaavnEndpoints,
}

impl JioSaavnExtractor {
    pub fn new(client: MediaClient) -> Self {
        Self::with_endpoints(client, SaavnEndpoints::default())
    }

    pub fn with_endpoints(client: MediaClient, endpoints: SaavnEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Resolves a song page URL into a playable mp3 URL plus metadata
    ///
    /// # Errors
    /// - `UnsupportedUrl` when the URL does not carry a song id
    /// - `Transport` for network failures on any of the three requests
    /// - `NotFound` when the embedded data marker is absent
    /// - `MalformedData` when the sanitized blob is not strict JSON
    /// - `MissingField` when title or the media reference is missing
    /// - `TokenExchange` when no authorized URL comes back
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        let media_id =
            song_id_from_url(url).ok_or_else(|| ExtractError::UnsupportedUrl(url.to_string()))?;

        self.prime_session().await?;

        tracing::debug!(%media_id, "fetching song page");
        let page = self.client.get(url).await?;
        let blob = INITIAL_DATA.extract(&page)?;
        let sanitized = sanitize_blob(blob);
        let tree: Value = serde_json::from_str(&sanitized)?;

        let song = require(&tree, &["song", "song"])?;
        let title = require_str(song, &["title", "text"])?;
        let partial_url = require_str(song, &["encrypted_media_url"])?;
        let album = get_str(song, &["album", "text"]).map(str::to_string);
        let thumbnail = first_str(song, &["image"]).map(str::to_string);

        let resolved = self.exchange_token(partial_url).await?;
        tracing::debug!(%media_id, "resolved authorized media URL");

        Ok(ExtractionResult {
            id: media_id,
            title: title.to_string(),
            ext: resolved.ext.clone(),
            formats: vec![MediaFormat::audio(
                resolved.direct_url,
                &resolved.ext,
                "MPEG audio",
                BITRATE_CODE,
            )],
            album,
            thumbnail,
            description: None,
            http_headers: Vec::new(),
        })
    }

    /// Warms server-side session state with a fresh fingerprint
    ///
    /// The response is discarded; only transport-level failures propagate.
    async fn prime_session(&self) -> Result<()> {
        let fp = fingerprint::generate(&mut rand::rng());
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
            .to_string();

        self.client
            .fire(
                &self.endpoints.stats_url,
                &[
                    ("ev", SESSION_EVENT),
                    ("fp", &fp),
                    ("_t", &timestamp),
                    ("ct", CLIENT_TAG),
                ],
            )
            .await
    }

    /// Trades the encrypted media reference for an authorized URL
    async fn exchange_token(&self, partial_url: &str) -> Result<ResolvedMedia> {
        let body = build_form_body(&[
            ("__call", TOKEN_CALL),
            ("_format", "json"),
            ("bitrate", BITRATE_CODE),
            ("url", partial_url),
        ]);

        let response = self.client.post_form(&self.endpoints.api_url, body).await?;
        let direct_url = auth_url_from_response(&response)?;

        Ok(ResolvedMedia {
            direct_url,
            kind: ContentKind::Audio,
            ext: "mp3".to_string(),
        })
    }
}

/// Pulls `auth_url` out of the token endpoint's non-JSON-wrapped response
fn auth_url_from_response(body: &str) -> Result<String> {
    let object = scan_json_object(body)
        .ok_or_else(|| ExtractError::TokenExchange("no JSON object in response".to_string()))?;
    let value: Value = serde_json::from_str(object)
        .map_err(|e| ExtractError::TokenExchange(format!("unparseable response object: {e}")))?;

    value
        .get("auth_url")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ExtractError::TokenExchange("auth_url missing from response".to_string()))
}
