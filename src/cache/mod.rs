// ABOUTME: Cache abstraction for derived analytics results with per-user invalidation
// ABOUTME: Pluggable provider trait with structured keys scoped to a single user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

/// In-memory cache implementation
pub mod memory;

use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Cache provider trait for pluggable backend implementations
///
/// Values are stored serialized, so any `Serialize + Deserialize` analytics
/// result can be cached without the backend knowing its type.
///
/// # Examples
///
/// ```rust,no_run
/// use ironlog::cache::{CacheKey, CacheProvider, CacheResource};
/// use ironlog::cache::memory::InMemoryCache;
/// use ironlog::intelligence::AnalyticsCacheConfig;
/// use chrono::NaiveDate;
/// use std::time::Duration;
/// use uuid::Uuid;
/// # async fn example() -> Result<(), ironlog::errors::AppError> {
/// let cache = InMemoryCache::new(&AnalyticsCacheConfig::default());
/// let user_id = Uuid::new_v4();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default();
/// let key = CacheKey::new(user_id, CacheResource::RecordsSummary { as_of: today });
///
/// cache.set(&key, &42_u64, Duration::from_secs(60)).await?;
/// let cached: Option<u64> = cache.get(&key).await?;
/// assert_eq!(cached, Some(42));
///
/// cache.invalidate_user(user_id).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait CacheProvider: Send + Sync + Clone {
    /// Store value in cache with TTL
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or storage fails
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()>;

    /// Retrieve value from cache; `None` when absent or expired
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>>;

    /// Remove single cache entry
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    async fn invalidate(&self, key: &CacheKey) -> AppResult<()>;

    /// Remove every entry belonging to `user_id`, returning how many were dropped
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    async fn invalidate_user(&self, user_id: Uuid) -> AppResult<u64>;

    /// Clear all cache entries
    ///
    /// # Errors
    ///
    /// Returns an error if clear operation fails
    async fn clear_all(&self) -> AppResult<()>;
}

/// Structured cache key with per-user isolation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Owner of the cached result
    pub user_id: Uuid,
    /// Specific result being cached
    pub resource: CacheResource,
}

impl CacheKey {
    /// Create new cache key
    #[must_use]
    pub const fn new(user_id: Uuid, resource: CacheResource) -> Self {
        Self { user_id, resource }
    }

    /// Prefix shared by every key of a user
    #[must_use]
    pub fn user_prefix(user_id: Uuid) -> String {
        format!("user:{user_id}:")
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::user_prefix(self.user_id), self.resource)
    }
}

/// Cacheable analytics results
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheResource {
    /// Personal records, streaks, and totals as of a given day
    RecordsSummary {
        /// Day the streaks were computed against
        as_of: NaiveDate,
    },
    /// Bucketed trend series over a resolved range
    TrendSeries {
        /// Period name after parsing (`daily`, `weekly`, `monthly`)
        period: String,
        /// First day of the resolved range
        start: NaiveDate,
        /// Last day of the resolved range
        end: NaiveDate,
    },
}

impl fmt::Display for CacheResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordsSummary { as_of } => write!(f, "records_summary:{as_of}"),
            Self::TrendSeries { period, start, end } => {
                write!(f, "trend_series:{period}:{start}:{end}")
            }
        }
    }
}
