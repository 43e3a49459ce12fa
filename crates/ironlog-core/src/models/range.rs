// ABOUTME: Analytics query windows: symbolic trend periods and inclusive date ranges
// ABOUTME: Unrecognized period names fall back to daily rather than failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic trend period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendPeriod {
    /// Last few days, one bucket per day
    #[default]
    Daily,
    /// Last few weeks, one bucket per ISO week
    Weekly,
    /// Last few months, one bucket per calendar month
    Monthly,
}

impl TrendPeriod {
    /// Parse a period name; anything unrecognized resolves to `Daily`
    #[must_use]
    pub fn parse(period: &str) -> Self {
        match period.trim().to_ascii_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::Daily,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive calendar date range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` carrying both bounds if `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// First day of the range
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both ends inclusive
    #[must_use]
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
