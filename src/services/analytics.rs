// ABOUTME: Analytics query service over a user's activity log
// ABOUTME: Records summaries and trend series served through a per-user invalidated cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! Analytics boundary
//!
//! Every query takes `today` explicitly so results are reproducible; the
//! `*_now` variants use the current UTC calendar date. Cached results are
//! keyed by user and query parameters and dropped whenever the user's log
//! grows.

use crate::cache::{CacheKey, CacheProvider, CacheResource};
use crate::errors::AppResult;
use crate::intelligence::{
    IntelligenceConfig, RecordsAnalyzer, RecordsSummary, TrendAggregator, TrendSeries,
    TrendWindowResolver,
};
use crate::logging::AnalyticsLogger;
use crate::models::{ActivityDetail, DateRange, TrendPeriod, WorkoutRecord};
use crate::storage::ActivityStore;
use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Serves records and trend analytics for users
pub struct AnalyticsService<S: ActivityStore, C: CacheProvider> {
    store: Arc<S>,
    cache: C,
    resolver: TrendWindowResolver,
    cache_ttl: Duration,
}

impl<S: ActivityStore, C: CacheProvider> AnalyticsService<S, C> {
    /// Create a service over `store`, caching results in `cache`
    #[must_use]
    pub fn new(store: Arc<S>, cache: C, config: &IntelligenceConfig) -> Self {
        Self {
            store,
            cache,
            resolver: TrendWindowResolver::with_config(config.trend_windows.clone()),
            cache_ttl: config.cache.ttl(),
        }
    }

    /// Append an entry to the user's activity log and drop their cached analytics
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a session payload carries out-of-range ratings,
    /// or a storage error if the append fails
    pub async fn log_record(&self, record: WorkoutRecord) -> AppResult<()> {
        if let ActivityDetail::Session(session) = &record.detail {
            for execution in &session.executions {
                execution.validate()?;
            }
            if let Some(feedback) = &session.feedback {
                feedback.validate()?;
            }
        }

        let (user_id, record_id) = (record.user_id, record.id);
        let workout_type = record.workout_type.clone();
        self.store.append_record(record).await?;

        match self.cache.invalidate_user(user_id).await {
            Ok(dropped) if dropped > 0 => {
                debug!(user.id = %user_id, dropped, "Invalidated cached analytics");
            }
            Ok(_) => {}
            Err(e) => warn!(user.id = %user_id, error = %e, "Failed to invalidate cached analytics"),
        }

        AnalyticsLogger::log_record_appended(user_id, record_id, &workout_type);
        Ok(())
    }

    /// Personal records, streaks, and lifetime totals as of `today`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the activity log cannot be read
    pub async fn records_summary(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<RecordsSummary> {
        let key = CacheKey::new(user_id, CacheResource::RecordsSummary { as_of: today });
        if let Some(summary) = self.cached::<RecordsSummary>(&key).await {
            AnalyticsLogger::log_analytics_query(user_id, "records_summary", true, 0);
            return Ok(summary);
        }

        let revision = self.store.user_revision(user_id).await?;
        let records = self.store.get_user_records(user_id).await?;
        let summary = RecordsAnalyzer::analyze(&records, today);
        self.store_cached(user_id, &key, &summary, revision).await;

        AnalyticsLogger::log_analytics_query(user_id, "records_summary", false, records.len());
        Ok(summary)
    }

    /// [`Self::records_summary`] as of the current UTC date
    ///
    /// # Errors
    ///
    /// Returns a storage error if the activity log cannot be read
    pub async fn records_summary_now(&self, user_id: Uuid) -> AppResult<RecordsSummary> {
        self.records_summary(user_id, Utc::now().date_naive()).await
    }

    /// Resolve a trend window without aggregating anything
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the explicit bounds are inverted
    pub fn resolve_window(
        &self,
        period: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> AppResult<DateRange> {
        self.resolver.resolve(period, start, end, today)
    }

    /// Bucketed trend series for `period`, honouring explicit bounds when both are given
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the explicit bounds are inverted, or a storage
    /// error if the activity log cannot be read
    pub async fn trend_series(
        &self,
        user_id: Uuid,
        period: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> AppResult<TrendSeries> {
        let period = TrendPeriod::parse(period);
        let range = self.resolver.resolve_period(period, start, end, today)?;

        let key = CacheKey::new(
            user_id,
            CacheResource::TrendSeries {
                period: period.as_str().to_owned(),
                start: range.start(),
                end: range.end(),
            },
        );
        if let Some(series) = self.cached::<TrendSeries>(&key).await {
            AnalyticsLogger::log_analytics_query(user_id, "trend_series", true, 0);
            return Ok(series);
        }

        let revision = self.store.user_revision(user_id).await?;
        let records = self.store.get_user_records(user_id).await?;
        let series = TrendAggregator::aggregate(&records, period, range);
        self.store_cached(user_id, &key, &series, revision).await;

        AnalyticsLogger::log_analytics_query(user_id, "trend_series", false, records.len());
        Ok(series)
    }

    /// [`Self::trend_series`] ending at the current UTC date
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the explicit bounds are inverted, or a storage
    /// error if the activity log cannot be read
    pub async fn trend_series_now(
        &self,
        user_id: Uuid,
        period: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<TrendSeries> {
        self.trend_series(user_id, period, start, end, Utc::now().date_naive())
            .await
    }

    // Cache failures degrade to recomputation
    async fn cached<T: DeserializeOwned + 'static>(&self, key: &CacheKey) -> Option<T> {
        match self.cache.get::<T>(key).await {
            Ok(hit) => hit,
            Err(e) => {
                warn!(cache.key = %key, error = %e, "Cache read failed");
                None
            }
        }
    }

    // An append that lands before the revision re-read is caught here; one that
    // lands after it invalidates the user's entries once this write is visible
    async fn store_cached<T: Serialize + Send + Sync + 'static>(
        &self,
        user_id: Uuid,
        key: &CacheKey,
        value: &T,
        revision: u64,
    ) {
        if let Err(e) = self.cache.set(key, value, self.cache_ttl).await {
            warn!(cache.key = %key, error = %e, "Cache write failed");
            return;
        }

        let current = match self.store.user_revision(user_id).await {
            Ok(current) if current == revision => return,
            Ok(current) => Some(current),
            Err(e) => {
                warn!(user.id = %user_id, error = %e, "Failed to re-read activity log revision");
                None
            }
        };

        debug!(
            cache.key = %key,
            revision,
            ?current,
            "Dropping analytics computed from a superseded log"
        );
        if let Err(e) = self.cache.invalidate(key).await {
            warn!(cache.key = %key, error = %e, "Failed to drop superseded cache entry");
        }
    }
}
