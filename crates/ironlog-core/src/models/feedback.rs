// ABOUTME: Session feedback submitted by a user after finishing a workout session
// ABOUTME: Typed optional fields, boundary validation, and display labels for ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

use crate::constants::ratings::{MAX_RATING, MIN_RATING};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for one finished session (at most one per session)
///
/// Every scoring input is optional: absence means the user skipped the
/// question and is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionFeedbackInput {
    /// Fraction of planned volume actually performed, in [0, 1]
    #[serde(default)]
    pub completion_rate: Option<f64>,
    /// Perceived difficulty, 1 (too easy) to 5 (too hard)
    #[serde(default)]
    pub overall_difficulty: Option<u8>,
    /// Satisfaction, 1 (poor) to 5 (excellent)
    #[serde(default)]
    pub satisfaction: Option<u8>,
    /// Energy level after the session, 1..=5 (descriptive only)
    #[serde(default)]
    pub energy_after: Option<u8>,
    /// Muscle soreness after the session, 1..=5 (descriptive only)
    #[serde(default)]
    pub muscle_soreness: Option<u8>,
    /// Whether the user would repeat this session
    #[serde(default)]
    pub would_repeat: bool,
    /// Free-text comment
    #[serde(default)]
    pub comment: Option<String>,
}

impl SessionFeedbackInput {
    /// Check the caller contract on every present field
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the completion rate is not a finite number in
    /// [0, 1] or any rating lies outside 1..=5.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(rate) = self.completion_rate {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(AppError::invalid_input(format!(
                    "completion_rate must be within [0, 1], got {rate}"
                ))
                .with_details(serde_json::json!({ "field": "completion_rate" })));
            }
        }

        for (field, value) in [
            ("overall_difficulty", self.overall_difficulty),
            ("satisfaction", self.satisfaction),
            ("energy_after", self.energy_after),
            ("muscle_soreness", self.muscle_soreness),
        ] {
            if let Some(rating) = value {
                if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                    return Err(AppError::invalid_input(format!(
                        "{field} must be within {MIN_RATING}..={MAX_RATING}, got {rating}"
                    ))
                    .with_details(serde_json::json!({ "field": field })));
                }
            }
        }

        Ok(())
    }

    /// True when all three success-score inputs are present
    #[must_use]
    pub const fn is_scorable(&self) -> bool {
        self.completion_rate.is_some()
            && self.overall_difficulty.is_some()
            && self.satisfaction.is_some()
    }
}

/// Display label for a perceived difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLabel {
    /// 1
    TooEasy,
    /// 2
    Easy,
    /// 3
    JustRight,
    /// 4
    Hard,
    /// 5
    TooHard,
    /// Absent or out of band
    Unrated,
}

impl DifficultyLabel {
    /// Map an optional 1..=5 rating to its label
    #[must_use]
    pub const fn from_rating(rating: Option<u8>) -> Self {
        match rating {
            Some(1) => Self::TooEasy,
            Some(2) => Self::Easy,
            Some(3) => Self::JustRight,
            Some(4) => Self::Hard,
            Some(5) => Self::TooHard,
            _ => Self::Unrated,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooEasy => "too easy",
            Self::Easy => "easy",
            Self::JustRight => "just right",
            Self::Hard => "hard",
            Self::TooHard => "too hard",
            Self::Unrated => "unrated",
        }
    }
}

impl fmt::Display for DifficultyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label for a satisfaction rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SatisfactionLabel {
    /// 1
    Poor,
    /// 2
    Fair,
    /// 3
    Good,
    /// 4
    VeryGood,
    /// 5
    Excellent,
    /// Absent or out of band
    Unrated,
}

impl SatisfactionLabel {
    /// Map an optional 1..=5 rating to its label
    #[must_use]
    pub const fn from_rating(rating: Option<u8>) -> Self {
        match rating {
            Some(1) => Self::Poor,
            Some(2) => Self::Fair,
            Some(3) => Self::Good,
            Some(4) => Self::VeryGood,
            Some(5) => Self::Excellent,
            _ => Self::Unrated,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::VeryGood => "very good",
            Self::Excellent => "excellent",
            Self::Unrated => "unrated",
        }
    }
}

impl fmt::Display for SatisfactionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
