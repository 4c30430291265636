//! Resolve a media page URL passed on the command line and print the
//! result as JSON.
//!
//! Usage: cargo run --example resolve_url -- <URL>

use playable_core::{MediaExtractor, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let url = match std::env::args().nth(1) {
        Some(url) => url,
        None => {
            eprintln!("usage: resolve_url <URL>");
            std::process::exit(2);
        }
    };

    let extractor = MediaExtractor::new()?;
    let result = extractor.extract(&url).await?;

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize result: {e}"),
    }
    Ok(())
}
