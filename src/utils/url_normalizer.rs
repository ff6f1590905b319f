//! Canonical form of submitted URLs.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Parses a URL and returns its serialized, canonical form.
///
/// The serialization is pure ASCII: control characters and non-ASCII code
/// points are percent-encoded and international hosts are punycoded, so the
/// result is always usable as an HTTP `Location` header. A bare host gains
/// its root path (`https://example.com` → `https://example.com/`).
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
///
/// # Examples
///
/// ```
/// use shortlink::utils::url_normalizer::normalize_url;
///
/// assert_eq!(
///     normalize_url("https://example.com/a\u{1}b").unwrap(),
///     "https://example.com/a%01b"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    Ok(Url::parse(input)?.into())
}
