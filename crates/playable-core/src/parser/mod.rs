//! Pattern-based extraction over raw page and response text
//!
//! Providers ship their data inline in markup or wrapped in non-JSON text,
//! so everything here works on raw strings. No DOM parsing.

pub mod blob;
pub mod scan;

pub use blob::{INITIAL_DATA, NEXT_DATA, ScriptBlob, sanitize_blob};
pub use scan::{scan_identifier, scan_json_object, scan_og_tag};
