//! Null-safe navigation over parsed provider data
//!
//! Provider blobs are deeply nested and half the keys are optional, so all
//! reads go through a path getter that yields `None` at any missing level.
//! Fields the output schema requires are unwrapped with the `require_*`
//! variants, which turn a missing leaf into `MissingField` naming the
//! dotted path.

use serde_json::Value;

use crate::error::{ExtractError, Result};

/// Walks `root` along `path`, where each segment is a map key or an array
/// index. Any missing key, out-of-range index or type mismatch yields `None`.
pub fn get_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = root;
    for segment in path {
        current = match current {
            Value::Object(map) => map.get(*segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// String leaf at `path`, or `None`
pub fn get_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    get_path(root, path)?.as_str()
}

/// First string element of the array at `path`, or `None`
pub fn first_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    get_path(root, path)?.as_array()?.first()?.as_str()
}

/// Required subtree at `path`; a missing level is `MissingField`
pub fn require<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Value> {
    get_path(root, path).ok_or_else(|| ExtractError::MissingField(path.join(".")))
}

/// Required string leaf at `path`; missing or non-string is `MissingField`
pub fn require_str<'a>(root: &'a Value, path: &[&str]) -> Result<&'a str> {
    get_str(root, path).ok_or_else(|| ExtractError::MissingField(path.join(".")))
}

/// Required first string element of the array at `path`
pub fn require_first_str<'a>(root: &'a Value, path: &[&str]) -> Result<&'a str> {
    first_str(root, path).ok_or_else(|| {
        let mut dotted = path.join(".");
        dotted.push_str(".0");
        ExtractError::MissingField(dotted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn song_tree() -> Value {
        json!({
            "song": {
                "song": {
                    "title": { "text": "Leja Re" },
                    "encrypted_media_url": "enc123",
                    "image": ["http://img", "http://img2"]
                }
            }
        })
    }

    #[test]
    fn test_get_path_nested() {
        let tree = song_tree();
        let title = get_path(&tree, &["song", "song", "title", "text"]);
        assert_eq!(title.and_then(Value::as_str), Some("Leja Re"));
    }

    #[test]
    fn test_get_path_array_index() {
        let tree = song_tree();
        assert_eq!(
            get_str(&tree, &["song", "song", "image", "1"]),
            Some("http://img2")
        );
    }

    #[test]
    fn test_missing_intermediate_key_yields_none() {
        let tree = song_tree();
        assert_eq!(get_path(&tree, &["song", "album", "text"]), None);
        assert_eq!(get_str(&tree, &["nope", "deeper", "still"]), None);
    }

    #[test]
    fn test_scalar_in_the_middle_yields_none() {
        let tree = song_tree();
        assert_eq!(
            get_path(&tree, &["song", "song", "encrypted_media_url", "x"]),
            None
        );
    }

    #[test]
    fn test_first_str() {
        let tree = song_tree();
        assert_eq!(
            first_str(&tree, &["song", "song", "image"]),
            Some("http://img")
        );
        assert_eq!(first_str(&tree, &["song", "song", "title"]), None);
    }

    #[test]
    fn test_require_str_present() {
        let tree = song_tree();
        let url = require_str(&tree, &["song", "song", "encrypted_media_url"]).unwrap();
        assert_eq!(url, "enc123");
    }

    #[test]
    fn test_require_str_missing_names_path() {
        let tree = song_tree();
        let err = require_str(&tree, &["song", "song", "album", "text"]).unwrap_err();
        match err {
            ExtractError::MissingField(path) => assert_eq!(path, "song.song.album.text"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_require_first_str_missing_names_index() {
        let tree = json!({ "video": { "urls": [] } });
        let err = require_first_str(&tree, &["video", "urls"]).unwrap_err();
        match err {
            ExtractError::MissingField(path) => assert_eq!(path, "video.urls.0"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_absence_does_not_block_required_fields() {
        let tree = json!({
            "song": { "song": {
                "title": { "text": "T" },
                "encrypted_media_url": "enc"
            }}
        });
        // optional album missing → None, required fields still resolve
        assert_eq!(get_str(&tree, &["song", "song", "album", "text"]), None);
        assert!(require_str(&tree, &["song", "song", "title", "text"]).is_ok());
        assert!(require_str(&tree, &["song", "song", "encrypted_media_url"]).is_ok());
    }
}
