// ABOUTME: In-memory cache implementation with LRU eviction and TTL support
// ABOUTME: Expired entries are dropped lazily on read and by explicit purge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

use super::{CacheKey, CacheProvider};
use crate::errors::AppResult;
use crate::intelligence::AnalyticsCacheConfig;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory cache with LRU eviction
///
/// Clones share the same store, so a cache handed to several services
/// observes one set of entries.
#[derive(Clone)]
pub struct InMemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl InMemoryCache {
    const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache sized by `config.max_entries`
    #[must_use]
    pub fn new(config: &AnalyticsCacheConfig) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CACHE_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Number of entries currently held, expired ones included
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Remove all expired entries, returning how many were dropped
    pub async fn purge_expired(&self) -> usize {
        let mut store = self.store.write().await;

        let expired_keys: Vec<String> = store
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            store.pop(key);
        }
        drop(store);

        if !expired_keys.is_empty() {
            debug!("Cleaned up {} expired cache entries", expired_keys.len());
        }
        expired_keys.len()
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new(&AnalyticsCacheConfig::default())
    }
}

#[async_trait::async_trait]
impl CacheProvider for InMemoryCache {
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()> {
        let serialized = serde_json::to_vec(value)?;
        let entry = CacheEntry::new(serialized, ttl);

        // LruCache evicts the least recently used entry on push when full
        self.store.write().await.push(key.to_string(), entry);

        Ok(())
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>> {
        let key = key.to_string();
        let mut store = self.store.write().await;

        // LruCache::get is mutable (updates access order)
        let Some(entry) = store.get(&key) else {
            return Ok(None);
        };

        if entry.is_expired() {
            store.pop(&key);
            drop(store);
            return Ok(None);
        }

        let value: T = serde_json::from_slice(&entry.data)?;
        drop(store);
        Ok(Some(value))
    }

    async fn invalidate(&self, key: &CacheKey) -> AppResult<()> {
        self.store.write().await.pop(&key.to_string());
        Ok(())
    }

    async fn invalidate_user(&self, user_id: Uuid) -> AppResult<u64> {
        let prefix = CacheKey::user_prefix(user_id);
        let mut store = self.store.write().await;

        let keys_to_remove: Vec<String> = store
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &keys_to_remove {
            store.pop(key);
        }
        drop(store);

        Ok(keys_to_remove.len() as u64)
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.store.write().await.clear();
        Ok(())
    }
}
