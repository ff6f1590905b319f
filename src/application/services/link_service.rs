//! Link shortening and resolution service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Expiration, LinkDetail};
use crate::domain::keys::{COUNTER_KEY, short_link_detail_key, short_link_url_key, url_hash_key};
use crate::domain::repositories::KvStore;
use crate::error::AppError;
use crate::utils::base62;
use crate::utils::fingerprint::fingerprint;

/// Allocates identifiers for URLs and resolves them back.
///
/// The service keeps no state of its own: every call goes to the store, so one
/// instance is shared by all request tasks. Identifier uniqueness comes from
/// the store's atomic counter increment.
pub struct LinkService<S: KvStore + ?Sized> {
    store: Arc<S>,
}

impl<S: KvStore + ?Sized> LinkService<S> {
    /// Creates a new link service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the identifier for `url`, allocating one if the URL is not indexed yet.
    ///
    /// # Allocation
    ///
    /// 1. Look up the URL's fingerprint in the dedup index; a non-empty hit is returned as-is
    /// 2. Increment the global counter and base62-encode the new value
    /// 3. Write the detail record, then the resolution record
    /// 4. Claim the index entry with set-if-absent
    ///
    /// All three keys share the TTL derived from `expiration_in_minutes`
    /// (`0` = never expires). If a concurrent call claimed the index first,
    /// its identifier is returned instead and the records written here are
    /// left to expire.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a negative or oversized expiration.
    /// Returns [`AppError::Store`] if any store call fails; writes completed
    /// before the failure are not rolled back.
    pub async fn shorten(&self, url: &str, expiration_in_minutes: i64) -> Result<String, AppError> {
        let expiration = Expiration::from_minutes(expiration_in_minutes)?;
        let index_key = url_hash_key(&fingerprint(url));

        if let Some(existing) = self.lookup_index(&index_key).await? {
            debug!("Index HIT: {} -> {}", url, existing);
            return Ok(existing);
        }
        debug!("Index MISS: {}", url);

        let id = self.allocate_id().await?;

        let detail = LinkDetail::new(url.to_string(), Utc::now(), expiration.minutes());
        let detail_json = serde_json::to_string(&detail)?;

        self.store
            .set(&short_link_detail_key(&id), &detail_json, expiration.ttl())
            .await?;
        self.store
            .set(&short_link_url_key(&id), url, expiration.ttl())
            .await?;

        if self
            .store
            .set_if_absent(&index_key, &id, expiration.ttl())
            .await?
        {
            debug!("Allocated {} for {} (ttl: {:?})", id, url, expiration.ttl());
            return Ok(id);
        }

        match self.lookup_index(&index_key).await? {
            Some(winner) => {
                debug!("Lost index race for {}: using {} instead of {}", url, winner, id);
                Ok(winner)
            }
            None => {
                self.store.set(&index_key, &id, expiration.ttl()).await?;
                debug!("Allocated {} for {} over an empty index entry", id, url);
                Ok(id)
            }
        }
    }

    /// Returns the original URL for an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is unknown or expired.
    /// Returns [`AppError::Store`] on store errors.
    pub async fn un_shorten(&self, identifier: &str) -> Result<String, AppError> {
        self.store
            .get(&short_link_url_key(identifier))
            .await?
            .ok_or_else(|| unknown_short_link(identifier))
    }

    /// Returns the detail record for an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is unknown or expired.
    /// Returns [`AppError::Serialization`] if the stored record is malformed.
    /// Returns [`AppError::Store`] on store errors.
    pub async fn short_link_info(&self, identifier: &str) -> Result<LinkDetail, AppError> {
        let raw = self
            .store
            .get(&short_link_detail_key(identifier))
            .await?
            .ok_or_else(|| unknown_short_link(identifier))?;

        Ok(serde_json::from_str(&raw)?)
    }

    /// Checks if the backing store is reachable.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }

    /// Reads the dedup index. Empty values count as a miss.
    async fn lookup_index(&self, index_key: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .store
            .get(index_key)
            .await?
            .filter(|id| !id.is_empty()))
    }

    /// Takes the next counter value and encodes it.
    async fn allocate_id(&self) -> Result<String, AppError> {
        let value = self.store.incr(COUNTER_KEY).await?;

        let value = u64::try_from(value)
            .ok()
            .filter(|v| *v > 0)
            .ok_or_else(|| {
                AppError::internal(
                    "Allocation counter is out of range",
                    json!({ "counter": value }),
                )
            })?;

        Ok(base62::encode(value))
    }
}

fn unknown_short_link(identifier: &str) -> AppError {
    AppError::not_found("unknown short link", json!({ "shortlink": identifier }))
}
