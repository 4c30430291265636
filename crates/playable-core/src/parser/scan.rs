//! Raw-text scans over secondary responses
//!
//! Token-exchange responses wrap their JSON in extraneous text, and decoy
//! media bodies embed the real asset id as plain ASCII. Both are recovered
//! by scanning, not parsing.

use regex::Regex;

use crate::parser::blob::unescape_html;

/// ASCII marker preceding the embedded asset identifier in a decoy body
pub const IDENTIFIER_MARKER: &str = "vid:";

/// Width of the embedded asset identifier. The decoy format stores the id
/// as exactly 32 characters after the marker; this is a protocol
/// assumption, not a heuristic.
pub const IDENTIFIER_LEN: usize = 32;

/// Finds the first brace-delimited JSON object in raw response text
///
/// Non-greedy: the match ends at the first closing brace, which is enough
/// for the flat objects the token endpoint returns.
pub fn scan_json_object(body: &str) -> Option<&str> {
    let re = Regex::new(r"(?s)\{.+?\}").ok()?;
    re.find(body).map(|m| m.as_str())
}

/// Slices the fixed-width asset identifier following the `vid:` marker
///
/// Returns `None` when the marker is absent or the body ends before the
/// full identifier width.
pub fn scan_identifier(body: &str) -> Option<&str> {
    let pos = body.find(IDENTIFIER_MARKER)?;
    let start = pos + IDENTIFIER_MARKER.len();
    body.get(start..start + IDENTIFIER_LEN)
}

/// Reads the content of an Open Graph meta tag from raw page text
///
/// Handles both attribute orders (`property` before `content` and the
/// reverse) and decodes HTML entities in the value.
pub fn scan_og_tag(page: &str, property: &str) -> Option<String> {
    let escaped = regex::escape(property);
    let patterns = [
        format!(r#"<meta[^>]+property=["']{escaped}["'][^>]*content=["']([^"']*)["']"#),
        format!(r#"<meta[^>]+content=["']([^"']*)["'][^>]*property=["']{escaped}["']"#),
    ];

    for pattern in &patterns {
        if let Ok(re) = Regex::new(pattern)
            && let Some(caps) = re.captures(page)
            && let Some(content) = caps.get(1)
        {
            let value = unescape_html(content.as_str());
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}
