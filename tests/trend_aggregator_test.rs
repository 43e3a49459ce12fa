// ABOUTME: Tests for trend series aggregation over resolved windows
// ABOUTME: Bucket boundaries, zero filling, clipping, and per-bucket totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{cardio_record, date, strength_record};
use ironlog::intelligence::{TrendAggregator, TrendWindowResolver};
use ironlog::models::{DateRange, TrendPeriod};
use uuid::Uuid;

#[test]
fn test_daily_series_is_zero_filled() {
    let user = Uuid::new_v4();
    let today = date(2024, 6, 15);
    let range = TrendWindowResolver::new()
        .resolve("daily", None, None, today)
        .unwrap();
    let records = vec![
        cardio_record(user, date(2024, 6, 12), 30, 300),
        cardio_record(user, date(2024, 6, 12), 20, 150),
        strength_record(user, today, 3, 10, 50.0, 45),
    ];

    let series = TrendAggregator::aggregate(&records, TrendPeriod::Daily, range);
    assert_eq!(series.buckets.len(), 5);
    assert_eq!(series.buckets[0].bucket_start, date(2024, 6, 11));
    assert_eq!(series.buckets[0].workouts, 0);

    let busy = &series.buckets[1];
    assert_eq!(busy.bucket_start, date(2024, 6, 12));
    assert_eq!(busy.workouts, 2);
    assert_eq!(busy.duration_minutes, 50);
    assert_eq!(busy.calories, 450);

    let last = &series.buckets[4];
    assert_eq!(last.bucket_end, today);
    assert_eq!(last.volume, 1500.0);
}

#[test]
fn test_weekly_buckets_start_on_monday_and_are_clipped() {
    let user = Uuid::new_v4();
    // 2024-05-19 is a Sunday, 2024-06-15 a Saturday
    let range = DateRange::new(date(2024, 5, 19), date(2024, 6, 15)).unwrap();
    let records = vec![
        cardio_record(user, date(2024, 5, 19), 30, 300),
        cardio_record(user, date(2024, 5, 20), 30, 300),
        cardio_record(user, date(2024, 6, 15), 30, 300),
    ];

    let series = TrendAggregator::aggregate(&records, TrendPeriod::Weekly, range);
    let starts: Vec<_> = series.buckets.iter().map(|b| b.bucket_start).collect();
    assert_eq!(
        starts,
        vec![
            date(2024, 5, 19),
            date(2024, 5, 20),
            date(2024, 5, 27),
            date(2024, 6, 3),
            date(2024, 6, 10),
        ]
    );

    assert_eq!(series.buckets[0].bucket_end, date(2024, 5, 19));
    assert_eq!(series.buckets[0].workouts, 1);
    assert_eq!(series.buckets[1].bucket_end, date(2024, 5, 26));
    assert_eq!(series.buckets[1].workouts, 1);
    assert_eq!(series.buckets[4].bucket_end, date(2024, 6, 15));
    assert_eq!(series.buckets[4].workouts, 1);
}

#[test]
fn test_monthly_buckets_follow_calendar_months() {
    let user = Uuid::new_v4();
    let range = DateRange::new(date(2024, 1, 15), date(2024, 3, 10)).unwrap();
    let records = vec![
        cardio_record(user, date(2024, 1, 20), 30, 300),
        cardio_record(user, date(2024, 2, 29), 45, 400),
        cardio_record(user, date(2024, 3, 10), 10, 100),
    ];

    let series = TrendAggregator::aggregate(&records, TrendPeriod::Monthly, range);
    assert_eq!(series.buckets.len(), 3);
    assert_eq!(series.buckets[0].bucket_start, date(2024, 1, 15));
    assert_eq!(series.buckets[0].bucket_end, date(2024, 1, 31));
    assert_eq!(series.buckets[1].bucket_start, date(2024, 2, 1));
    assert_eq!(series.buckets[1].bucket_end, date(2024, 2, 29));
    assert_eq!(series.buckets[1].calories, 400);
    assert_eq!(series.buckets[2].bucket_end, date(2024, 3, 10));
    assert_eq!(series.buckets[2].duration_minutes, 10);
}

#[test]
fn test_records_outside_range_are_excluded() {
    let user = Uuid::new_v4();
    let range = DateRange::new(date(2024, 6, 10), date(2024, 6, 12)).unwrap();
    let records = vec![
        cardio_record(user, date(2024, 6, 9), 30, 300),
        cardio_record(user, date(2024, 6, 11), 30, 300),
        cardio_record(user, date(2024, 6, 13), 30, 300),
    ];

    let series = TrendAggregator::aggregate(&records, TrendPeriod::Daily, range);
    let total: u64 = series.buckets.iter().map(|b| b.workouts).sum();
    assert_eq!(total, 1);
    assert_eq!(series.range, range);
    assert_eq!(series.period, TrendPeriod::Daily);
}
