// ABOUTME: Online preference and effectiveness learning per user and exercise
// ABOUTME: Exponential moving average updates with clamping, confidence, and ordinal labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! Preference learning
//!
//! Each feedback event nudges the stored estimate toward the new sample:
//! `updated = current * (1 - w) + sample * w`, then clamps the result to the
//! score's declared range. Absent samples are "no signal this time" and leave
//! the row untouched.

use crate::config::PreferenceLearnerConfig;
use chrono::Utc;
use ironlog_core::constants::preference::{
    MAX_EFFECTIVENESS_SCORE, MAX_PREFERENCE_SCORE, MIN_EFFECTIVENESS_SCORE, MIN_PREFERENCE_SCORE,
};
use ironlog_core::constants::ratings::NEUTRAL_SATISFACTION;
use ironlog_core::models::{ExercisePreference, PreferenceLabel};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Read-only view of a preference row after an update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    /// Exercise the row belongs to
    pub exercise_name: String,
    /// Current preference score in [-1, 1]
    pub preference_score: f64,
    /// Current effectiveness score in [0, 1]
    pub effectiveness_score: f64,
    /// Preference updates applied so far
    pub data_points: u32,
    /// Saturating trust in the estimate, in [0, 1]
    pub confidence: f64,
    /// Ordinal band of the preference score
    pub label: PreferenceLabel,
}

/// Maintains per-user, per-exercise preference models
#[derive(Debug, Clone, Default)]
pub struct PreferenceLearner {
    config: PreferenceLearnerConfig,
}

impl PreferenceLearner {
    /// Create a learner with default settings (learning rate 0.1, saturation at 6 points)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a learner with custom settings
    #[must_use]
    pub const fn with_config(config: PreferenceLearnerConfig) -> Self {
        Self { config }
    }

    /// Blend a new preference sample into `pref.preference_score`
    ///
    /// Increments `data_points` and refreshes `last_updated`. Returns `false`
    /// and leaves the row untouched when the sample is absent.
    pub fn update_preference(
        &self,
        pref: &mut ExercisePreference,
        new_score: Option<f64>,
        weight: Option<f64>,
    ) -> bool {
        let Some(sample) = Self::usable_sample(new_score, "preference") else {
            return false;
        };
        let weight = self.effective_weight(weight);

        let previous = pref.preference_score;
        pref.preference_score = Self::blend(previous, sample, weight)
            .clamp(MIN_PREFERENCE_SCORE, MAX_PREFERENCE_SCORE);
        pref.data_points = pref.data_points.saturating_add(1);
        pref.last_updated = Utc::now();

        debug!(
            user.id = %pref.user_id,
            exercise = %pref.exercise_name,
            previous,
            updated = pref.preference_score,
            data_points = pref.data_points,
            "Preference score updated"
        );
        true
    }

    /// Blend a new effectiveness sample into `pref.effectiveness_score`
    ///
    /// Refreshes `last_updated` but leaves `data_points` unchanged: only
    /// preference updates count toward confidence.
    pub fn update_effectiveness(
        &self,
        pref: &mut ExercisePreference,
        new_score: Option<f64>,
        weight: Option<f64>,
    ) -> bool {
        let Some(sample) = Self::usable_sample(new_score, "effectiveness") else {
            return false;
        };
        let weight = self.effective_weight(weight);

        let previous = pref.effectiveness_score;
        pref.effectiveness_score = Self::blend(previous, sample, weight)
            .clamp(MIN_EFFECTIVENESS_SCORE, MAX_EFFECTIVENESS_SCORE);
        pref.last_updated = Utc::now();

        debug!(
            user.id = %pref.user_id,
            exercise = %pref.exercise_name,
            previous,
            updated = pref.effectiveness_score,
            "Effectiveness score updated"
        );
        true
    }

    /// `min(data_points / saturation, 1.0)`
    #[must_use]
    pub fn confidence(&self, pref: &ExercisePreference) -> f64 {
        (f64::from(pref.data_points) / self.config.confidence_saturation_points).min(1.0)
    }

    /// Ordinal band of the row's preference score
    #[must_use]
    pub fn label(pref: &ExercisePreference) -> PreferenceLabel {
        pref.label()
    }

    /// Snapshot of the derived read-only views
    #[must_use]
    pub fn snapshot(&self, pref: &ExercisePreference) -> PreferenceSnapshot {
        PreferenceSnapshot {
            exercise_name: pref.exercise_name.clone(),
            preference_score: pref.preference_score,
            effectiveness_score: pref.effectiveness_score,
            data_points: pref.data_points,
            confidence: self.confidence(pref),
            label: pref.label(),
        }
    }

    /// Map a 1..=5 satisfaction rating onto the preference scale: 1 -> -1.0, 3 -> 0.0, 5 -> 1.0
    #[must_use]
    pub fn satisfaction_signal(satisfaction: Option<u8>) -> Option<f64> {
        satisfaction.map(|s| (f64::from(s) - NEUTRAL_SATISFACTION) / 2.0)
    }

    fn blend(current: f64, sample: f64, weight: f64) -> f64 {
        current * (1.0 - weight) + sample * weight
    }

    fn usable_sample(new_score: Option<f64>, target: &str) -> Option<f64> {
        match new_score {
            Some(sample) if sample.is_finite() => Some(sample),
            Some(sample) => {
                warn!(target_score = target, %sample, "Ignoring non-finite learner sample");
                None
            }
            None => None,
        }
    }

    fn effective_weight(&self, weight: Option<f64>) -> f64 {
        match weight {
            Some(w) if w.is_finite() && w > 0.0 && w <= 1.0 => w,
            Some(w) => {
                warn!(
                    weight = %w,
                    fallback = self.config.default_learning_rate,
                    "Learning rate outside (0, 1], using default"
                );
                self.config.default_learning_rate
            }
            None => self.config.default_learning_rate,
        }
    }
}
