//! High-level extraction API
//!
//! One facade owning a shared HTTP client; page URLs are dispatched to the
//! matching provider flow.

use crate::client::{ClientConfig, MediaClient};
use crate::error::{ExtractError, Result};
use crate::providers::{JioSaavnExtractor, TikTokExtractor};
use crate::types::{ExtractionResult, Playlist};
use crate::url::Provider;

/// Main entry point for resolving media page URLs
///
/// # Example
/// ```no_run
/// # async fn example() -> playable_core::Result<()> {
/// use playable_core::MediaExtractor;
///
/// let extractor = MediaExtractor::new()?;
/// let result = extractor
///     .extract("https://www.jiosaavn.com/song/leja-re/OQsEfQFVUXk")
///     .await?;
/// println!("{}: {}", result.title, result.formats[0].url);
/// # Ok(())
/// # }
/// ```
pub struct MediaExtractor {
    jiosaavn: JioSaavnExtractor,
    tiktok: TikTokExtractor,
}

impl MediaExtractor {
    /// Create an extractor with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create an extractor with custom client configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = MediaClient::with_config(config)?;
        Ok(Self {
            jiosaavn: JioSaavnExtractor::new(client.clone()),
            tiktok: TikTokExtractor::new(client),
        })
    }

    /// Resolve a single media page URL into a playable result
    ///
    /// # Errors
    /// `UnsupportedUrl` when no provider recognizes the URL; otherwise the
    /// provider flow's own failure, propagated unchanged.
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        match Provider::for_url(url) {
            Some(Provider::JioSaavn) => self.jiosaavn.extract(url).await,
            Some(Provider::TikTok) => self.tiktok.extract(url).await,
            None => Err(ExtractError::UnsupportedUrl(url.to_string())),
        }
    }

    /// Fetch a creator's video listing by user id
    ///
    /// Distinct from [`extract`](Self::extract): listing extraction never
    /// shares an entry point with single-video extraction.
    pub async fn extract_user_videos(&self, user_id: &str) -> Result<Playlist> {
        self.tiktok.user_videos(user_id).await
    }
}
