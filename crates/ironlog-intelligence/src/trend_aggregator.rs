// ABOUTME: Buckets activity log entries into a contiguous daily, weekly, or monthly series
// ABOUTME: Zero-filled buckets clipped to the requested range for chart-ready trend output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

use crate::records_analyzer::round_to_tenth;
use chrono::{Datelike, Days, Months, NaiveDate};
use ironlog_core::models::{DateRange, TrendPeriod, WorkoutRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated activity for one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBucket {
    /// First day covered (clipped to the series range)
    pub bucket_start: NaiveDate,
    /// Last day covered (clipped to the series range)
    pub bucket_end: NaiveDate,
    /// Number of records in the bucket
    pub workouts: u64,
    /// Total duration in minutes
    pub duration_minutes: u64,
    /// Total calories
    pub calories: u64,
    /// Total volume, rounded to one decimal
    pub volume: f64,
}

/// A bucketed series over a resolved range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Bucket granularity
    pub period: TrendPeriod,
    /// Range the series covers
    pub range: DateRange,
    /// Buckets in chronological order, one per day / ISO week / month
    pub buckets: Vec<TrendBucket>,
}

/// Builds trend series from activity log entries
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendAggregator;

impl TrendAggregator {
    /// Aggregate the records that fall inside `range`
    ///
    /// Weekly buckets start on Monday. Every bucket in the range is present,
    /// including empty ones.
    #[must_use]
    pub fn aggregate(records: &[WorkoutRecord], period: TrendPeriod, range: DateRange) -> TrendSeries {
        let mut buckets = Vec::new();
        let mut index_by_start = HashMap::new();

        let mut cursor = range.start();
        while cursor <= range.end() {
            let (natural_start, natural_end) = Self::bucket_bounds(period, cursor);
            index_by_start.insert(natural_start, buckets.len());
            buckets.push(TrendBucket {
                bucket_start: natural_start.max(range.start()),
                bucket_end: natural_end.min(range.end()),
                workouts: 0,
                duration_minutes: 0,
                calories: 0,
                volume: 0.0,
            });
            match natural_end.succ_opt() {
                Some(next) => cursor = next,
                None => break,
            }
        }

        for record in records.iter().filter(|r| range.contains(r.date)) {
            let (natural_start, _) = Self::bucket_bounds(period, record.date);
            if let Some(&index) = index_by_start.get(&natural_start) {
                let bucket = &mut buckets[index];
                bucket.workouts += 1;
                bucket.duration_minutes += u64::from(record.duration_or_zero());
                bucket.calories += u64::from(record.calories_or_zero());
                bucket.volume += record.volume();
            }
        }

        for bucket in &mut buckets {
            bucket.volume = round_to_tenth(bucket.volume);
        }

        TrendSeries {
            period,
            range,
            buckets,
        }
    }

    /// Unclipped first and last day of the bucket containing `date`
    fn bucket_bounds(period: TrendPeriod, date: NaiveDate) -> (NaiveDate, NaiveDate) {
        match period {
            TrendPeriod::Daily => (date, date),
            TrendPeriod::Weekly => {
                let offset = u64::from(date.weekday().num_days_from_monday());
                let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
                let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
                (start, end)
            }
            TrendPeriod::Monthly => {
                let start = date.with_day(1).unwrap_or(date);
                let end = start
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(NaiveDate::MAX);
                (start, end)
            }
        }
    }
}
