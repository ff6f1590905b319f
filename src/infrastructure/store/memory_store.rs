//! In-process key-value store with TTL emulation.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval};
use tracing::debug;

use crate::domain::repositories::{KvStore, StoreError, StoreResult};

#[derive(Debug, Clone)]
struct StoredValue {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredValue {
    fn new(value: &str, ttl: Option<Duration>, now: Instant) -> StoreResult<Self> {
        let expires_at = match ttl {
            Some(ttl) => Some(now.checked_add(ttl).ok_or_else(|| {
                StoreError::Operation(format!("TTL of {:?} is out of range", ttl))
            })?),
            None => None,
        };

        Ok(Self {
            value: value.to_string(),
            expires_at,
        })
    }

    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// Key-value store held in process memory.
///
/// Used when no Redis is configured and as the backend for integration tests.
/// Expiry is measured on the tokio clock, so tests running with a paused clock
/// can move past a TTL with `tokio::time::advance`. Expired keys are dropped
/// when touched, and by [`MemoryStore::spawn_sweeper`] for keys nobody reads
/// again.
///
/// Every operation locks a single shard of the map, which makes `incr` and
/// `set_if_absent` atomic with respect to concurrent callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, StoredValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (data is lost on restart)");
        Self::default()
    }

    /// Number of keys currently held, including expired ones not yet dropped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every expired key and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, stored| stored.is_live(now));
        before.saturating_sub(self.entries.len())
    }

    /// Spawns a background task that calls [`purge_expired`](Self::purge_expired)
    /// every `period`.
    ///
    /// The task holds a weak reference and exits once the store is dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let store: Weak<Self> = Arc::downgrade(self);

        tokio::spawn(async move {
            let mut ticker = interval(period);
            // First tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let Some(store) = store.upgrade() else {
                    break;
                };
                let removed = store.purge_expired();
                if removed > 0 {
                    debug!("Swept {} expired keys", removed);
                }
            }
        })
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let now = Instant::now();

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let current = if occupied.get().is_live(now) {
                    occupied.get().value.parse::<i64>().map_err(|_| {
                        StoreError::Operation(format!("value at '{}' is not an integer", key))
                    })?
                } else {
                    occupied.get_mut().expires_at = None;
                    0
                };

                let next = current.checked_add(1).ok_or_else(|| {
                    StoreError::Operation(format!("increment of '{}' would overflow", key))
                })?;
                occupied.get_mut().value = next.to_string();
                Ok(next)
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredValue::new("1", None, now)?);
                Ok(1)
            }
        }
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let now = Instant::now();

        let lookup = self
            .entries
            .get(key)
            .map(|stored| stored.is_live(now).then(|| stored.value.clone()));

        match lookup {
            Some(Some(value)) => Ok(Some(value)),
            Some(None) => {
                self.entries.remove_if(key, |_, stored| !stored.is_live(now));
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()> {
        let stored = StoredValue::new(value, ttl, Instant::now())?;
        self.entries.insert(key.to_string(), stored);
        Ok(())
    }

    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> StoreResult<bool> {
        let now = Instant::now();

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_live(now) {
                    Ok(false)
                } else {
                    occupied.insert(StoredValue::new(value, ttl, now)?);
                    Ok(true)
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredValue::new(value, ttl, now)?);
                Ok(true)
            }
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}
