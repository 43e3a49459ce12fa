// ABOUTME: Per-user, per-exercise preference and effectiveness model
// ABOUTME: Stored row shape plus the five-band ordinal preference label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

use crate::constants::preference_bands::{
    DISFAVORED_MIN, FAVORED_MIN, NEUTRAL_MIN, VERY_FAVORED_MIN,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Learned preference and effectiveness estimate for one exercise of one user
///
/// Identified by `(user_id, exercise_name)`. Rows are created lazily with
/// zero-valued scores on the first feedback event that references the
/// exercise and updated in place afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePreference {
    /// Owning user
    pub user_id: Uuid,
    /// Exercise name as recorded in the session
    pub exercise_name: String,
    /// How much the user likes the exercise, in [-1.0, 1.0]
    pub preference_score: f64,
    /// How well the exercise works for the user, in [0.0, 1.0]
    pub effectiveness_score: f64,
    /// Number of preference updates applied so far
    pub data_points: u32,
    /// Time of the last non-no-op update
    pub last_updated: DateTime<Utc>,
}

impl ExercisePreference {
    /// Create the zero-valued default row for `(user_id, exercise_name)`
    #[must_use]
    pub fn new(user_id: Uuid, exercise_name: impl Into<String>) -> Self {
        Self {
            user_id,
            exercise_name: exercise_name.into(),
            preference_score: 0.0,
            effectiveness_score: 0.0,
            data_points: 0,
            last_updated: Utc::now(),
        }
    }

    /// Ordinal label of the current preference score
    #[must_use]
    pub fn label(&self) -> PreferenceLabel {
        PreferenceLabel::from_score(self.preference_score)
    }
}

/// Five ordinal bands over the preference score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceLabel {
    /// Score >= 0.6
    VeryFavored,
    /// Score >= 0.2
    Favored,
    /// Score >= -0.2
    Neutral,
    /// Score >= -0.6
    Disfavored,
    /// Anything lower
    VeryDisfavored,
}

impl PreferenceLabel {
    /// Map a preference score to its band; lower bounds are inclusive
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= VERY_FAVORED_MIN {
            Self::VeryFavored
        } else if score >= FAVORED_MIN {
            Self::Favored
        } else if score >= NEUTRAL_MIN {
            Self::Neutral
        } else if score >= DISFAVORED_MIN {
            Self::Disfavored
        } else {
            Self::VeryDisfavored
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryFavored => "very favored",
            Self::Favored => "favored",
            Self::Neutral => "neutral",
            Self::Disfavored => "disfavored",
            Self::VeryDisfavored => "very disfavored",
        }
    }
}

impl fmt::Display for PreferenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
