// ABOUTME: Historical analytics over a user's full activity log
// ABOUTME: Personal records, day-granularity activity streaks, and cumulative totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! Records analysis
//!
//! All computations take the complete, unordered record collection and a
//! fixed `today`, so results are deterministic and side-effect free.

use chrono::{Days, NaiveDate};
use ironlog_core::models::WorkoutRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Best-ever value of one metric and the record that set it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Record that holds the PR
    pub record_id: Uuid,
    /// Day the PR was set
    pub date: NaiveDate,
    /// Activity type of the record
    pub workout_type: String,
    /// Metric value
    pub value: f64,
}

impl PersonalRecord {
    fn from_record(record: &WorkoutRecord, value: f64) -> Self {
        Self {
            record_id: record.id,
            date: record.date,
            workout_type: record.workout_type.clone(),
            value,
        }
    }
}

/// Personal records across the whole history; all absent for an empty history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecords {
    /// Largest `sets * reps * weight`
    pub max_volume: Option<PersonalRecord>,
    /// Most repetitions
    pub max_reps: Option<PersonalRecord>,
    /// Longest duration in minutes
    pub longest_duration: Option<PersonalRecord>,
}

/// Consecutive-day activity streaks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive active days ending today; 0 if today has no record
    pub current_streak: u32,
    /// Longest run of consecutive active days up to today
    pub longest_streak: u32,
}

/// Lifetime totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativeStats {
    /// Sum of calories, missing counted as zero
    pub total_calories: u64,
    /// Sum of per-record volumes, rounded to one decimal
    pub total_volume: f64,
    /// Sum of durations in minutes, missing counted as zero
    pub total_duration_minutes: u64,
    /// Number of records
    pub total_workouts: u64,
}

/// Everything the analytics boundary reports for a user's history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsSummary {
    /// Personal records
    pub personal_records: PersonalRecords,
    /// Activity streaks
    pub streaks: StreakSummary,
    /// Lifetime totals
    pub totals: CumulativeStats,
}

/// Computes personal records, streaks, and cumulative totals
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordsAnalyzer;

impl RecordsAnalyzer {
    /// Create an analyzer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run every analysis over `records` as of `today`
    #[must_use]
    pub fn analyze(records: &[WorkoutRecord], today: NaiveDate) -> RecordsSummary {
        RecordsSummary {
            personal_records: Self::personal_records(records),
            streaks: Self::streaks(records, today),
            totals: Self::cumulative_stats(records),
        }
    }

    /// Single pass over `records`; ties keep the first-encountered record
    #[must_use]
    pub fn personal_records(records: &[WorkoutRecord]) -> PersonalRecords {
        let mut prs = PersonalRecords::default();

        for record in records {
            Self::challenge(&mut prs.max_volume, record, record.volume());
            Self::challenge(&mut prs.max_reps, record, f64::from(record.reps()));
            Self::challenge(
                &mut prs.longest_duration,
                record,
                f64::from(record.duration_or_zero()),
            );
        }

        prs
    }

    /// Current and longest streaks of consecutive active days, as of `today`
    ///
    /// Records dated after `today` are ignored.
    #[must_use]
    pub fn streaks(records: &[WorkoutRecord], today: NaiveDate) -> StreakSummary {
        let active_days: BTreeSet<NaiveDate> = records
            .iter()
            .map(|record| record.date)
            .filter(|date| *date <= today)
            .collect();

        StreakSummary {
            current_streak: Self::current_streak(&active_days, today),
            longest_streak: Self::longest_streak(&active_days),
        }
    }

    /// Lifetime totals; volume is summed unrounded and rounded once at the end
    #[must_use]
    pub fn cumulative_stats(records: &[WorkoutRecord]) -> CumulativeStats {
        let mut total_calories = 0_u64;
        let mut total_volume = 0.0_f64;
        let mut total_duration_minutes = 0_u64;

        for record in records {
            total_calories += u64::from(record.calories_or_zero());
            total_volume += record.volume();
            total_duration_minutes += u64::from(record.duration_or_zero());
        }

        CumulativeStats {
            total_calories,
            total_volume: round_to_tenth(total_volume),
            total_duration_minutes,
            total_workouts: records.len() as u64,
        }
    }

    fn challenge(best: &mut Option<PersonalRecord>, record: &WorkoutRecord, value: f64) {
        if best.as_ref().map_or(true, |current| value > current.value) {
            *best = Some(PersonalRecord::from_record(record, value));
        }
    }

    fn current_streak(active_days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut day = today;
        while active_days.contains(&day) {
            streak += 1;
            match day.checked_sub_days(Days::new(1)) {
                Some(previous) => day = previous,
                None => break,
            }
        }
        streak
    }

    /// Forward scan over the sorted active days, resetting the run on any gap
    fn longest_streak(active_days: &BTreeSet<NaiveDate>) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut previous: Option<NaiveDate> = None;

        for &day in active_days {
            run = match previous {
                Some(prev) if prev.succ_opt() == Some(day) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(day);
        }

        longest
    }
}

/// Round to one decimal place
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
