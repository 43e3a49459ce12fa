// ABOUTME: Tests for the composite session success score
// ABOUTME: Exact formula values, fail-soft absent inputs, caps, and display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{assert_close, full_feedback};
use ironlog::errors::ErrorCode;
use ironlog::intelligence::SessionScorer;
use ironlog::models::{DifficultyLabel, SatisfactionLabel, SessionFeedbackInput};

#[test]
fn test_reference_session_scores_0_865() {
    let score = SessionScorer::compute_success_score(Some(0.85), Some(3), Some(4));
    assert_close(score, 0.865);

    let breakdown = SessionScorer::breakdown(Some(0.85), Some(3), Some(4)).unwrap();
    assert_close(breakdown.completion, 0.34);
    assert_close(breakdown.difficulty, 0.3);
    assert_close(breakdown.satisfaction, 0.225);
    assert_eq!(breakdown.total, score);
}

#[test]
fn test_score_matches_formula_bit_for_bit() {
    for completion in [0.0, 0.25, 0.5, 0.85, 1.0] {
        for difficulty in 1_u8..=5 {
            for satisfaction in 1_u8..=5 {
                let expected = (completion * 0.4
                    + (1.0 - (f64::from(difficulty) - 3.0).abs() / 2.0).max(0.0) * 0.3
                    + (f64::from(satisfaction) - 1.0) / 4.0 * 0.3)
                    .min(1.0);
                let actual = SessionScorer::compute_success_score(
                    Some(completion),
                    Some(difficulty),
                    Some(satisfaction),
                );
                assert_eq!(actual, expected);
            }
        }
    }
}

#[test]
fn test_any_absent_input_scores_exactly_zero() {
    assert_eq!(SessionScorer::compute_success_score(None, Some(3), Some(4)), 0.0);
    assert_eq!(SessionScorer::compute_success_score(Some(0.9), None, Some(4)), 0.0);
    assert_eq!(SessionScorer::compute_success_score(Some(0.9), Some(3), None), 0.0);
    assert_eq!(SessionScorer::compute_success_score(None, None, None), 0.0);
    assert!(SessionScorer::breakdown(Some(0.9), Some(3), None).is_none());
}

#[test]
fn test_difficulty_component_decays_to_zero_at_extremes() {
    let easy = SessionScorer::breakdown(Some(0.0), Some(1), Some(1)).unwrap();
    let hard = SessionScorer::breakdown(Some(0.0), Some(5), Some(1)).unwrap();
    let slightly_hard = SessionScorer::breakdown(Some(0.0), Some(4), Some(1)).unwrap();

    assert_eq!(easy.difficulty, 0.0);
    assert_eq!(hard.difficulty, 0.0);
    assert_close(slightly_hard.difficulty, 0.15);
}

#[test]
fn test_perfect_session_is_capped_at_one() {
    let score = SessionScorer::compute_success_score(Some(1.0), Some(3), Some(5));
    assert!(score <= 1.0);
    assert_close(score, 1.0);
}

#[test]
fn test_scoring_is_deterministic() {
    let first = SessionScorer::compute_success_score(Some(0.73), Some(2), Some(4));
    let second = SessionScorer::compute_success_score(Some(0.73), Some(2), Some(4));
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_score_feedback_reads_the_three_inputs() {
    let feedback = full_feedback(0.85, 3, 4);
    assert_close(SessionScorer::score_feedback(&feedback), 0.865);
    assert!(feedback.is_scorable());

    let partial = SessionFeedbackInput {
        completion_rate: Some(0.85),
        ..SessionFeedbackInput::default()
    };
    assert!(!partial.is_scorable());
    assert_eq!(SessionScorer::score_feedback(&partial), 0.0);
}

#[test]
fn test_difficulty_labels() {
    let expected = [
        (Some(1), DifficultyLabel::TooEasy, "too easy"),
        (Some(2), DifficultyLabel::Easy, "easy"),
        (Some(3), DifficultyLabel::JustRight, "just right"),
        (Some(4), DifficultyLabel::Hard, "hard"),
        (Some(5), DifficultyLabel::TooHard, "too hard"),
        (None, DifficultyLabel::Unrated, "unrated"),
    ];
    for (rating, label, text) in expected {
        assert_eq!(SessionScorer::difficulty_label(rating), label);
        assert_eq!(label.to_string(), text);
    }
}

#[test]
fn test_satisfaction_labels() {
    let expected = [
        (Some(1), SatisfactionLabel::Poor, "poor"),
        (Some(2), SatisfactionLabel::Fair, "fair"),
        (Some(3), SatisfactionLabel::Good, "good"),
        (Some(4), SatisfactionLabel::VeryGood, "very good"),
        (Some(5), SatisfactionLabel::Excellent, "excellent"),
        (None, SatisfactionLabel::Unrated, "unrated"),
    ];
    for (rating, label, text) in expected {
        assert_eq!(SessionScorer::satisfaction_label(rating), label);
        assert_eq!(label.to_string(), text);
    }
}

#[test]
fn test_feedback_validation_rejects_out_of_band_values() {
    let bad_rate = SessionFeedbackInput {
        completion_rate: Some(1.2),
        ..SessionFeedbackInput::default()
    };
    assert_eq!(bad_rate.validate().unwrap_err().code, ErrorCode::InvalidInput);

    let nan_rate = SessionFeedbackInput {
        completion_rate: Some(f64::NAN),
        ..SessionFeedbackInput::default()
    };
    assert!(nan_rate.validate().is_err());

    let bad_soreness = SessionFeedbackInput {
        muscle_soreness: Some(0),
        ..SessionFeedbackInput::default()
    };
    let err = bad_soreness.validate().unwrap_err();
    assert_eq!(err.details["field"], "muscle_soreness");

    assert!(full_feedback(0.0, 1, 5).validate().is_ok());
    assert!(SessionFeedbackInput::default().validate().is_ok());
}
