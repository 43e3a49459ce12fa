// ABOUTME: Composite success score for a finished workout session
// ABOUTME: Weighted completion, difficulty fit, and satisfaction with fail-soft handling of gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! Session success scoring
//!
//! ```text
//! score = min(completion * 0.4
//!             + max(0, 1 - |difficulty - 3| / 2) * 0.3
//!             + (satisfaction - 1) / 4 * 0.3,
//!             1.0)
//! ```
//!
//! Stored scores from earlier deployments were produced with exactly this
//! evaluation order, so the arithmetic below must not be rearranged.

use ironlog_core::constants::scoring::{
    COMPLETION_WEIGHT, DIFFICULTY_FALLOFF, DIFFICULTY_WEIGHT, IDEAL_DIFFICULTY, MAX_SUCCESS_SCORE,
    SATISFACTION_WEIGHT,
};
use ironlog_core::models::{DifficultyLabel, SatisfactionLabel, SessionFeedbackInput};
use serde::{Deserialize, Serialize};

/// Individual weighted components of a success score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// `completion_rate * 0.4`
    pub completion: f64,
    /// Difficulty fit, peaking at 3
    pub difficulty: f64,
    /// Rescaled satisfaction
    pub satisfaction: f64,
    /// Capped sum of the components
    pub total: f64,
}

/// Computes a session's composite success score
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionScorer;

impl SessionScorer {
    /// Create a scorer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Composite score in [0, 1]; exactly `0.0` if any input is absent
    #[must_use]
    pub fn compute_success_score(
        completion_rate: Option<f64>,
        overall_difficulty: Option<u8>,
        satisfaction: Option<u8>,
    ) -> f64 {
        Self::breakdown(completion_rate, overall_difficulty, satisfaction)
            .map_or(0.0, |breakdown| breakdown.total)
    }

    /// Score a feedback record
    #[must_use]
    pub fn score_feedback(feedback: &SessionFeedbackInput) -> f64 {
        Self::compute_success_score(
            feedback.completion_rate,
            feedback.overall_difficulty,
            feedback.satisfaction,
        )
    }

    /// Weighted components, or `None` if any input is absent
    #[must_use]
    pub fn breakdown(
        completion_rate: Option<f64>,
        overall_difficulty: Option<u8>,
        satisfaction: Option<u8>,
    ) -> Option<ScoreBreakdown> {
        let (Some(completion_rate), Some(difficulty), Some(satisfaction)) =
            (completion_rate, overall_difficulty, satisfaction)
        else {
            return None;
        };

        let completion = completion_rate * COMPLETION_WEIGHT;
        let difficulty = Self::difficulty_fit(difficulty) * DIFFICULTY_WEIGHT;
        let satisfaction = (f64::from(satisfaction) - 1.0) / 4.0 * SATISFACTION_WEIGHT;
        let total = (completion + difficulty + satisfaction).min(MAX_SUCCESS_SCORE);

        Some(ScoreBreakdown {
            completion,
            difficulty,
            satisfaction,
            total,
        })
    }

    /// Display label for a difficulty rating
    #[must_use]
    pub const fn difficulty_label(rating: Option<u8>) -> DifficultyLabel {
        DifficultyLabel::from_rating(rating)
    }

    /// Display label for a satisfaction rating
    #[must_use]
    pub const fn satisfaction_label(rating: Option<u8>) -> SatisfactionLabel {
        SatisfactionLabel::from_rating(rating)
    }

    /// 1.0 at the ideal difficulty, decaying linearly to 0.0 two steps away
    fn difficulty_fit(difficulty: u8) -> f64 {
        (1.0 - (f64::from(difficulty) - IDEAL_DIFFICULTY).abs() / DIFFICULTY_FALLOFF).max(0.0)
    }
}
