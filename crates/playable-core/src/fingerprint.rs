//! Session fingerprint generation
//!
//! The priming endpoint expects a 32-character hex token, fresh per call.
//! The RNG is a parameter so tests can pass a seeded generator.

use rand::Rng;

const HEX_CHARS: &[u8] = b"0123456789abcdef";

/// Length of a session fingerprint in characters
pub const FINGERPRINT_LEN: usize = 32;

/// Generates a fresh 32-character hex fingerprint
pub fn generate<R: Rng>(rng: &mut R) -> String {
    (0..FINGERPRINT_LEN)
        .map(|_| HEX_CHARS[rng.random_range(0..HEX_CHARS.len())] as char)
        .collect()
}
