//! Key layout in the key-value store.
//!
//! | Key                         | Value                    | TTL          |
//! |-----------------------------|--------------------------|--------------|
//! | `next.url.id`               | allocation counter       | none         |
//! | `shortlink:{id}:detail`     | [`LinkDetail`] as JSON   | link TTL     |
//! | `shortlink:{id}:url`        | original URL             | link TTL     |
//! | `urlhash:{fingerprint}:url` | identifier               | link TTL     |
//!
//! [`LinkDetail`]: crate::domain::entities::LinkDetail

/// Global allocation counter, only ever touched with an atomic increment.
pub const COUNTER_KEY: &str = "next.url.id";

/// Key of the raw URL read when resolving an identifier.
pub fn short_link_url_key(id: &str) -> String {
    format!("shortlink:{}:url", id)
}

/// Key of the JSON detail record for an identifier.
pub fn short_link_detail_key(id: &str) -> String {
    format!("shortlink:{}:detail", id)
}

/// Key of the dedup index entry for a URL fingerprint.
pub fn url_hash_key(fingerprint: &str) -> String {
    format!("urlhash:{}:url", fingerprint)
}
