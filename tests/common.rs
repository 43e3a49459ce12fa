// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and activity log record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `ironlog`

use chrono::{Days, NaiveDate};
use ironlog::models::{
    ActivityDetail, ExerciseExecution, SessionDetail, SessionFeedbackInput, StrengthMetrics,
    WorkoutRecord,
};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// `today - days`
pub fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).expect("date in range")
}

/// A lifting entry with the given strength metrics and duration
pub fn strength_record(
    user_id: Uuid,
    day: NaiveDate,
    sets: u32,
    reps: u32,
    weight: f64,
    duration_minutes: u32,
) -> WorkoutRecord {
    WorkoutRecord::builder(user_id, day, "strength")
        .strength(sets, reps, weight)
        .duration_minutes(duration_minutes)
        .build()
}

/// A cardio entry with duration and calories only
pub fn cardio_record(user_id: Uuid, day: NaiveDate, duration_minutes: u32, calories: u32) -> WorkoutRecord {
    WorkoutRecord::builder(user_id, day, "running")
        .duration_minutes(duration_minutes)
        .calories(calories)
        .build()
}

/// Feedback with every scoring input present
pub fn full_feedback(completion_rate: f64, difficulty: u8, satisfaction: u8) -> SessionFeedbackInput {
    SessionFeedbackInput {
        completion_rate: Some(completion_rate),
        overall_difficulty: Some(difficulty),
        satisfaction: Some(satisfaction),
        would_repeat: true,
        ..SessionFeedbackInput::default()
    }
}

/// A structured session over `exercises` with optional feedback
pub fn session_detail(exercises: &[&str], feedback: Option<SessionFeedbackInput>) -> SessionDetail {
    SessionDetail {
        session_id: Uuid::new_v4(),
        executions: exercises
            .iter()
            .map(|name| ExerciseExecution {
                exercise_name: (*name).to_owned(),
                metrics: StrengthMetrics {
                    sets: Some(3),
                    reps: Some(10),
                    weight: Some(50.0),
                },
                rpe: Some(7),
            })
            .collect(),
        feedback,
    }
}

/// A session activity log entry wrapping `detail`
pub fn session_record(user_id: Uuid, day: NaiveDate, detail: SessionDetail) -> WorkoutRecord {
    WorkoutRecord::builder(user_id, day, "strength")
        .duration_minutes(60)
        .detail(ActivityDetail::Session(detail))
        .build()
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
