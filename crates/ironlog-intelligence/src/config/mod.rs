// ABOUTME: Intelligence configuration for preference learning, trend windows, and caching
// ABOUTME: Loads defaults, applies IRONLOG_* environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! Intelligence Configuration Module
//!
//! Type-safe configuration for the personalization and analytics components.
//! Configuration is loaded once at process start with [`IntelligenceConfig::load`]
//! and passed to component constructors; there is no global instance.
//!
//! The success-score weights and label bands are not configurable: they are
//! compatibility-bearing constants in `ironlog_core::constants`.

pub mod error;

pub use error::ConfigError;

use ironlog_core::constants::{
    cache::{DEFAULT_ANALYTICS_TTL_SECS, DEFAULT_CACHE_MAX_ENTRIES},
    preference::{CONFIDENCE_SATURATION_POINTS, DEFAULT_LEARNING_RATE},
    trend_windows::{DAILY_WINDOW_DAYS, MONTHLY_WINDOW_MONTHS, WEEKLY_WINDOW_WEEKS},
};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Preference learner settings
    pub preference: PreferenceLearnerConfig,
    /// Trend window lengths
    pub trend_windows: TrendWindowConfig,
    /// Analytics cache settings
    pub cache: AnalyticsCacheConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.preference.default_learning_rate;
        if !rate.is_finite() || rate <= 0.0 || rate > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_learning_rate must be within (0, 1]",
            ));
        }

        let saturation = self.preference.confidence_saturation_points;
        if !saturation.is_finite() || saturation <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "confidence_saturation_points must be positive",
            ));
        }

        let windows = &self.trend_windows;
        if windows.daily_window_days == 0
            || windows.weekly_window_weeks == 0
            || windows.monthly_window_months == 0
        {
            return Err(ConfigError::InvalidRange(
                "trend windows must cover at least one period",
            ));
        }

        if self.cache.max_entries == 0 {
            return Err(ConfigError::InvalidRange(
                "cache max_entries must be at least 1",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Preference learner
        Self::apply_env_var(
            "IRONLOG_PREFERENCE_LEARNING_RATE",
            &mut self.preference.default_learning_rate,
        )?;
        Self::apply_env_var(
            "IRONLOG_PREFERENCE_CONFIDENCE_POINTS",
            &mut self.preference.confidence_saturation_points,
        )?;

        // Trend windows
        Self::apply_env_var(
            "IRONLOG_TREND_DAILY_DAYS",
            &mut self.trend_windows.daily_window_days,
        )?;
        Self::apply_env_var(
            "IRONLOG_TREND_WEEKLY_WEEKS",
            &mut self.trend_windows.weekly_window_weeks,
        )?;
        Self::apply_env_var(
            "IRONLOG_TREND_MONTHLY_MONTHS",
            &mut self.trend_windows.monthly_window_months,
        )?;

        // Analytics cache
        Self::apply_env_var("IRONLOG_CACHE_TTL_SECS", &mut self.cache.ttl_secs)?;
        Self::apply_env_var("IRONLOG_CACHE_MAX_ENTRIES", &mut self.cache.max_entries)?;

        Ok(self)
    }
}

/// Preference learner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceLearnerConfig {
    /// Learning rate used when a caller supplies none
    pub default_learning_rate: f64,
    /// Preference updates needed for full confidence
    pub confidence_saturation_points: f64,
}

impl Default for PreferenceLearnerConfig {
    fn default() -> Self {
        Self {
            default_learning_rate: DEFAULT_LEARNING_RATE,
            confidence_saturation_points: CONFIDENCE_SATURATION_POINTS,
        }
    }
}

/// Lengths of the symbolic trend windows, each ending today inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendWindowConfig {
    /// Calendar days covered by `daily`
    pub daily_window_days: u32,
    /// Calendar weeks covered by `weekly`
    pub weekly_window_weeks: u32,
    /// Calendar months covered by `monthly`
    pub monthly_window_months: u32,
}

impl Default for TrendWindowConfig {
    fn default() -> Self {
        Self {
            daily_window_days: DAILY_WINDOW_DAYS,
            weekly_window_weeks: WEEKLY_WINDOW_WEEKS,
            monthly_window_months: MONTHLY_WINDOW_MONTHS,
        }
    }
}

/// Analytics cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsCacheConfig {
    /// Time-to-live of cached analytics results, in seconds
    pub ttl_secs: u64,
    /// Maximum number of cached entries before LRU eviction
    pub max_entries: usize,
}

impl AnalyticsCacheConfig {
    /// TTL as a `Duration`
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for AnalyticsCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_ANALYTICS_TTL_SECS,
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}
