// ABOUTME: Benchmark fixtures for generating realistic activity logs
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! Deterministic activity log generation.

use chrono::{Days, NaiveDate};
use ironlog::models::{Intensity, WorkoutRecord};
use uuid::Uuid;

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few weeks of training
    Small,
    /// About a year of training
    Medium,
    /// Several years of near-daily training
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 30,
            Self::Medium => 365,
            Self::Large => 3000,
        }
    }
}

/// Fixed "today" so results do not depend on the wall clock
#[must_use]
pub fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default()
}

/// Generate a mixed strength and cardio history ending at [`bench_today`]
///
/// Every seventh day is a rest day so streaks have realistic gaps.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn generate_history(size: HistorySize) -> Vec<WorkoutRecord> {
    let user_id = Uuid::new_v4();
    let today = bench_today();

    (0..size.count())
        .filter(|index| index % 7 != 6)
        .map(|index| {
            let day = today
                .checked_sub_days(Days::new(index as u64))
                .unwrap_or(today);
            let minutes = 30 + ((index * 13) % 60) as u32;

            if index % 2 == 0 {
                WorkoutRecord::builder(user_id, day, "strength")
                    .strength(
                        3 + (index % 3) as u32,
                        5 + ((index * 7) % 10) as u32,
                        40.0 + ((index * 11) % 80) as f64,
                    )
                    .duration_minutes(minutes)
                    .intensity(Intensity::High)
                    .build()
            } else {
                WorkoutRecord::builder(user_id, day, "running")
                    .duration_minutes(minutes)
                    .calories(minutes * 11)
                    .intensity(Intensity::Moderate)
                    .build()
            }
        })
        .collect()
}
