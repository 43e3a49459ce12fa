// ABOUTME: Core data models for the Ironlog personalization and analytics core
// ABOUTME: Re-exports activity log entries, session feedback, preferences, and date ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! # Data Models
//!
//! Plain data handed to the core by the surrounding service layer and returned
//! from it. All models serialize with serde so the service layer can render
//! them directly.
//!
//! ## Core Models
//!
//! - `WorkoutRecord`: one append-only activity log entry with a typed detail payload
//! - `SessionFeedbackInput`: the user's feedback for one finished session
//! - `ExercisePreference`: the learned per-user, per-exercise model
//! - `DateRange` / `TrendPeriod`: analytics query windows

mod feedback;
mod preference;
mod range;
mod record;

pub use feedback::{DifficultyLabel, SatisfactionLabel, SessionFeedbackInput};
pub use preference::{ExercisePreference, PreferenceLabel};
pub use range::{DateRange, TrendPeriod};
pub use record::{
    ActivityDetail, ExerciseExecution, Intensity, SessionDetail, StrengthMetrics, WorkoutRecord,
    WorkoutRecordBuilder,
};
