//! Syntax check for short link identifiers in request paths.

use regex::Regex;
use std::sync::LazyLock;

/// Identifiers are what [`crate::utils::base62::encode`] can produce.
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{1,11}$").expect("identifier regex is valid"));

/// Returns `true` if `candidate` has the shape of a short link identifier.
pub fn is_valid_identifier(candidate: &str) -> bool {
    IDENTIFIER_REGEX.is_match(candidate)
}
