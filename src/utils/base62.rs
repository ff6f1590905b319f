//! Base62 encoding of counter values into short identifiers.
//!
//! The alphabet is `0-9`, then `a-z`, then `A-Z`. Encoding is positional with
//! the most significant digit first and never emits leading zeros, so every
//! `u64` maps to exactly one identifier and `0` maps to `"0"`.

/// Digits in ascending order of value.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Longest identifier [`encode`] can produce (the length of `encode(u64::MAX)`).
pub const MAX_ENCODED_LEN: usize = 11;

/// Encodes a non-negative integer as a base62 string.
///
/// # Examples
///
/// ```
/// use shortlink::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut pos = MAX_ENCODED_LEN;

    while n > 0 {
        pos -= 1;
        buf[pos] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    buf[pos..].iter().map(|&b| b as char).collect()
}
