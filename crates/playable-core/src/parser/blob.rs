//! Embedded blob extraction and sanitization
//!
//! Provider pages carry their data as a script-embedded near-JSON blob.
//! Each supported marker is a named [`ScriptBlob`] grammar so a provider
//! layout change surfaces as one named `NotFound` failure. The sanitizer
//! rewrites the known non-JSON constructs so a strict parser accepts the
//! blob.

use regex::Regex;

use crate::error::{ExtractError, Result};

/// Replacement for date-constructor calls. The exact timestamp is never
/// read downstream; any fixed quoted literal keeps the blob parseable and
/// the rewrite idempotent.
const DATE_LITERAL: &str = "\"1970-01-01T00:00:00Z\"";

/// A marker-delimited script blob grammar
///
/// `pattern` must carry exactly one capture group holding the blob text.
#[derive(Debug, Clone, Copy)]
pub struct ScriptBlob {
    /// Name reported in `NotFound` failures
    pub name: &'static str,
    pattern: &'static str,
}

/// `window.__INITIAL_DATA__ = <blob> ;* </script>` assignment marker
pub const INITIAL_DATA: ScriptBlob = ScriptBlob {
    name: "initial-data",
    pattern: r"(?s)window\.__INITIAL_DATA__\s*=\s*(.+?);*\s*</script>",
};

/// `<script id="__NEXT_DATA__" ...> <blob> </script>` tag marker
pub const NEXT_DATA: ScriptBlob = ScriptBlob {
    name: "next-data",
    pattern: r#"(?s)<script\s+id="__NEXT_DATA__"[^>]*>(.*?)</script>"#,
};

impl ScriptBlob {
    /// Extracts the raw blob substring from page text
    ///
    /// # Errors
    /// `NotFound` with the grammar name when the marker is absent or the
    /// capture is empty. Absence is a hard failure: it means the page
    /// layout changed or the content is unavailable.
    pub fn extract<'a>(&self, page: &'a str) -> Result<&'a str> {
        let re = Regex::new(self.pattern).map_err(|_| ExtractError::NotFound(self.name))?;
        let blob = re
            .captures(page)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or(ExtractError::NotFound(self.name))?;

        if blob.trim().is_empty() {
            return Err(ExtractError::NotFound(self.name));
        }
        Ok(blob)
    }
}

/// Rewrites provider-specific non-JSON constructs into strict JSON
///
/// HTML entities are decoded first, then every `new Date(...)` constructor
/// call becomes a fixed quoted string. Applying the sanitizer to already
/// sanitized text is a no-op.
pub fn sanitize_blob(raw: &str) -> String {
    let unescaped = unescape_html(raw);
    match Regex::new(r"new Date\(.*?\)") {
        Ok(re) => re.replace_all(&unescaped, DATE_LITERAL).into_owned(),
        Err(_) => unescaped,
    }
}

/// Decodes the HTML entities providers use inside embedded blobs
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
