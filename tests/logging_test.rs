// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates defaults, environment handling, and subscriber initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ironlog::logging::{AnalyticsLogger, LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use uuid::Uuid;

const LOGGING_VARS: [&str; 7] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "SERVICE_VERSION",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
];

fn clear_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location);
    assert!(config.include_thread);
}

#[test]
#[serial]
fn test_compact_format_and_explicit_location() {
    clear_env();
    env::set_var("LOG_FORMAT", "compact");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Compact);
    assert!(config.include_location);
    assert!(!config.include_thread);
    assert_eq!(config.environment, "development");
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_pretty() {
    clear_env();
    env::set_var("LOG_FORMAT", "xml");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.level, "info");
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "ironlog");
    assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_second_initialization_is_an_error() {
    clear_env();
    let config = LoggingConfig {
        format: LogFormat::Compact,
        level: "warn".into(),
        ..LoggingConfig::default()
    };

    // Whichever call installs the global subscriber, the next one must fail
    let first = config.init();
    let second = config.init();
    assert!(first.is_ok());
    assert!(second.is_err());

    AnalyticsLogger::log_record_appended(Uuid::new_v4(), Uuid::new_v4(), "running");
    AnalyticsLogger::log_analytics_query(Uuid::new_v4(), "records_summary", false, 3);
    AnalyticsLogger::log_feedback_ingested(Uuid::new_v4(), Uuid::new_v4(), 0.865, 2);
}
