//! playable-core
//!
//! Resolves public media page URLs into direct, playable media URLs plus
//! metadata, for providers that do not expose the direct URL in the page
//! response. The page instead embeds a near-JSON data blob, and the true
//! URL takes a secondary exchange to construct: either a token exchange
//! against an RPC endpoint, or scanning a watermarked decoy download for
//! the real asset identifier.
//!
//! # Pipeline
//!
//! Session priming → page fetch → embedded-blob extraction → sanitization
//! → strict JSON parse → null-safe navigation → secondary resolution →
//! result assembly. Every stage fails fast; there is no partial-success
//! mode.
//!
//! # Example
//!
//! ```no_run
//! use playable_core::{MediaExtractor, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let extractor = MediaExtractor::new()?;
//!
//!     let song = extractor
//!         .extract("https://www.jiosaavn.com/song/leja-re/OQsEfQFVUXk")
//!         .await?;
//!     println!("{}: {}", song.title, song.formats[0].url);
//!
//!     Ok(())
//! }
//! ```
//!
//! Direct URLs are session-authorized and expire; resolve them close to
//! playback time and replay any headers carried in
//! [`ExtractionResult::http_headers`].

mod client;
mod error;
mod extractor;
pub mod fingerprint;
pub mod navigate;
pub mod parser;
pub mod providers;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, MediaClient};

// Re-export error types
pub use error::{ExtractError, Result};

// Re-export main extraction API
pub use extractor::MediaExtractor;

// Re-export data types
pub use types::{ContentKind, ExtractionResult, MediaFormat, Playlist, ResolvedMedia};
