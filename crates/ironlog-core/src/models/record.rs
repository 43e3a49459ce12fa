// ABOUTME: Append-only activity log entry with a typed detail payload
// ABOUTME: Unifies free-form workout records and structured sessions into one model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

use super::feedback::SessionFeedbackInput;
use crate::constants::ratings::{MAX_RPE, MIN_RPE};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Self-reported workout intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Easy effort
    Low,
    /// Moderate effort
    Moderate,
    /// Hard effort
    High,
}

/// Strength metrics of a lifting entry; any factor may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthMetrics {
    /// Number of sets
    pub sets: Option<u32>,
    /// Repetitions per set
    pub reps: Option<u32>,
    /// Load per repetition
    pub weight: Option<f64>,
}

impl StrengthMetrics {
    /// `sets * reps * weight`, missing factors counted as zero
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.sets.unwrap_or(0)) * f64::from(self.reps.unwrap_or(0))
            * self.weight.unwrap_or(0.0)
    }
}

/// One exercise performed inside a structured session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseExecution {
    /// Exercise name; keys the preference model
    pub exercise_name: String,
    /// Sets, reps and load actually performed
    #[serde(default)]
    pub metrics: StrengthMetrics,
    /// Perceived exertion, 1..=10 (not part of any scoring formula)
    #[serde(default)]
    pub rpe: Option<u8>,
}

impl ExerciseExecution {
    /// Check the RPE against its 1..=10 scale
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the RPE is present and outside 1..=10
    pub fn validate(&self) -> AppResult<()> {
        match self.rpe {
            Some(rpe) if !(MIN_RPE..=MAX_RPE).contains(&rpe) => Err(AppError::invalid_input(
                format!(
                    "rpe for {} must be within {MIN_RPE}..={MAX_RPE}, got {rpe}",
                    self.exercise_name
                ),
            )),
            _ => Ok(()),
        }
    }
}

/// Structured session payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetail {
    /// Session identifier
    pub session_id: Uuid,
    /// Exercises performed, in order
    pub executions: Vec<ExerciseExecution>,
    /// Feedback, if the user left any
    #[serde(default)]
    pub feedback: Option<SessionFeedbackInput>,
}

/// Typed payload of an activity log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityDetail {
    /// A logged lifting entry
    Strength(StrengthMetrics),
    /// A structured workout session
    Session(SessionDetail),
    /// Any other activity (cardio, classes, sports)
    General,
}

/// A single immutable activity log entry
///
/// Optional numeric fields are treated as zero in every aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Entry identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day of the activity
    pub date: NaiveDate,
    /// Free-form activity type ("strength", "running", ...)
    pub workout_type: String,
    /// Duration in minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Calories burned
    #[serde(default)]
    pub calories: Option<u32>,
    /// Self-reported intensity
    #[serde(default)]
    pub intensity: Option<Intensity>,
    /// Typed payload
    pub detail: ActivityDetail,
}

impl WorkoutRecord {
    /// Start building an entry
    #[must_use]
    pub fn builder(
        user_id: Uuid,
        date: NaiveDate,
        workout_type: impl Into<String>,
    ) -> WorkoutRecordBuilder {
        WorkoutRecordBuilder::new(user_id, date, workout_type)
    }

    /// Strength metrics, present only for strength entries
    #[must_use]
    pub fn strength(&self) -> Option<&StrengthMetrics> {
        match &self.detail {
            ActivityDetail::Strength(metrics) => Some(metrics),
            ActivityDetail::Session(_) | ActivityDetail::General => None,
        }
    }

    /// Training volume; zero for entries without strength metrics
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.strength().map_or(0.0, StrengthMetrics::volume)
    }

    /// Repetitions; zero when absent
    #[must_use]
    pub fn reps(&self) -> u32 {
        self.strength().and_then(|m| m.reps).unwrap_or(0)
    }

    /// Duration in minutes; zero when absent
    #[must_use]
    pub fn duration_or_zero(&self) -> u32 {
        self.duration_minutes.unwrap_or(0)
    }

    /// Calories; zero when absent
    #[must_use]
    pub fn calories_or_zero(&self) -> u32 {
        self.calories.unwrap_or(0)
    }
}

/// Fluent builder for [`WorkoutRecord`]
#[derive(Debug, Clone)]
pub struct WorkoutRecordBuilder {
    record: WorkoutRecord,
}

impl WorkoutRecordBuilder {
    /// Builder for a `General` entry with a fresh id
    #[must_use]
    pub fn new(user_id: Uuid, date: NaiveDate, workout_type: impl Into<String>) -> Self {
        Self {
            record: WorkoutRecord {
                id: Uuid::new_v4(),
                user_id,
                date,
                workout_type: workout_type.into(),
                duration_minutes: None,
                calories: None,
                intensity: None,
                detail: ActivityDetail::General,
            },
        }
    }

    /// Set the entry id
    #[must_use]
    pub fn id(mut self, id: Uuid) -> Self {
        self.record.id = id;
        self
    }

    /// Set the duration in minutes
    #[must_use]
    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.record.duration_minutes = Some(minutes);
        self
    }

    /// Set the calories burned
    #[must_use]
    pub fn calories(mut self, calories: u32) -> Self {
        self.record.calories = Some(calories);
        self
    }

    /// Set the intensity
    #[must_use]
    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.record.intensity = Some(intensity);
        self
    }

    /// Make this a strength entry
    #[must_use]
    pub fn strength(mut self, sets: u32, reps: u32, weight: f64) -> Self {
        self.record.detail = ActivityDetail::Strength(StrengthMetrics {
            sets: Some(sets),
            reps: Some(reps),
            weight: Some(weight),
        });
        self
    }

    /// Set an arbitrary detail payload
    #[must_use]
    pub fn detail(mut self, detail: ActivityDetail) -> Self {
        self.record.detail = detail;
        self
    }

    /// Finish the entry
    #[must_use]
    pub fn build(self) -> WorkoutRecord {
        self.record
    }
}
