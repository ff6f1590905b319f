//! URL fingerprints used as deduplication keys.

use sha1::{Digest, Sha1};

/// Length of a fingerprint in hex characters (160 bits).
pub const FINGERPRINT_LEN: usize = 40;

/// Returns the lowercase hex SHA-1 digest of `url`.
///
/// The digest only keys the dedup index and is not a security boundary. Two
/// URLs with colliding digests would share one identifier.
pub fn fingerprint(url: &str) -> String {
    hex::encode(Sha1::digest(url.as_bytes()))
}
