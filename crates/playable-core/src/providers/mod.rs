//! Provider-specific resolution flows

pub mod jiosaavn;
pub mod tiktok;

pub use jiosaavn::{JioSaavnExtractor, SaavnEndpoints};
pub use tiktok::{TikTokEndpoints, TikTokExtractor};
