// ABOUTME: Tests for intelligence configuration defaults, env overrides, and validation
// ABOUTME: Env-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ironlog::errors::{AppError, ErrorCode};
use ironlog::intelligence::{ConfigError, IntelligenceConfig};
use serial_test::serial;
use std::env;
use std::time::Duration;

const ENV_VARS: [&str; 7] = [
    "IRONLOG_PREFERENCE_LEARNING_RATE",
    "IRONLOG_PREFERENCE_CONFIDENCE_POINTS",
    "IRONLOG_TREND_DAILY_DAYS",
    "IRONLOG_TREND_WEEKLY_WEEKS",
    "IRONLOG_TREND_MONTHLY_MONTHS",
    "IRONLOG_CACHE_TTL_SECS",
    "IRONLOG_CACHE_MAX_ENTRIES",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_matches_documented_values() {
    let config = IntelligenceConfig::default();

    assert_eq!(config.preference.default_learning_rate, 0.1);
    assert_eq!(config.preference.confidence_saturation_points, 6.0);
    assert_eq!(config.trend_windows.daily_window_days, 5);
    assert_eq!(config.trend_windows.weekly_window_weeks, 4);
    assert_eq!(config.trend_windows.monthly_window_months, 3);
    assert_eq!(config.cache.ttl(), Duration::from_secs(300));
    assert_eq!(config.cache.max_entries, 1000);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_without_overrides_equals_default() {
    clear_env();
    assert_eq!(IntelligenceConfig::load().unwrap(), IntelligenceConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_env();
    env::set_var("IRONLOG_PREFERENCE_LEARNING_RATE", "0.25");
    env::set_var("IRONLOG_TREND_WEEKLY_WEEKS", " 8 ");
    env::set_var("IRONLOG_CACHE_TTL_SECS", "60");

    let config = IntelligenceConfig::load().unwrap();
    clear_env();

    assert_eq!(config.preference.default_learning_rate, 0.25);
    assert_eq!(config.trend_windows.weekly_window_weeks, 8);
    assert_eq!(config.cache.ttl_secs, 60);
    assert_eq!(config.trend_windows.daily_window_days, 5);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_env();
    env::set_var("IRONLOG_TREND_DAILY_DAYS", "five");

    let result = IntelligenceConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_learning_rate_fails_validation() {
    clear_env();
    env::set_var("IRONLOG_PREFERENCE_LEARNING_RATE", "1.5");

    let result = IntelligenceConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_zero_windows_and_capacity_fail_validation() {
    let mut config = IntelligenceConfig::default();
    config.trend_windows.monthly_window_months = 0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::default();
    config.cache.max_entries = 0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::default();
    config.preference.confidence_saturation_points = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let err: AppError = ConfigError::Parse("Invalid IRONLOG_CACHE_TTL_SECS".to_owned()).into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("IRONLOG_CACHE_TTL_SECS"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_config_round_trips_through_json() {
    let config = IntelligenceConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: IntelligenceConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
