// ABOUTME: Resolves symbolic trend periods into concrete inclusive date ranges
// ABOUTME: Explicit caller bounds win; inverted ranges are reported as InvalidRange
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

use crate::config::TrendWindowConfig;
use chrono::{Days, Months, NaiveDate};
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::{DateRange, TrendPeriod};
use tracing::debug;

/// Turns `daily` / `weekly` / `monthly` into a date range ending today
#[derive(Debug, Clone, Default)]
pub struct TrendWindowResolver {
    config: TrendWindowConfig,
}

impl TrendWindowResolver {
    /// Create a resolver with the standard windows (5 days, 4 weeks, 3 months)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with custom window lengths
    #[must_use]
    pub const fn with_config(config: TrendWindowConfig) -> Self {
        Self { config }
    }

    /// Resolve a period name, honouring explicit bounds when both are supplied
    ///
    /// A single explicit bound is ignored and the period window is used.
    /// Unrecognized period names resolve as `daily`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the explicit or resolved start is after the end
    pub fn resolve(
        &self,
        period: &str,
        explicit_start: Option<NaiveDate>,
        explicit_end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> AppResult<DateRange> {
        self.resolve_period(
            TrendPeriod::parse(period),
            explicit_start,
            explicit_end,
            today,
        )
    }

    /// Resolve an already-parsed period
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the explicit or resolved start is after the end
    pub fn resolve_period(
        &self,
        period: TrendPeriod,
        explicit_start: Option<NaiveDate>,
        explicit_end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> AppResult<DateRange> {
        if let (Some(start), Some(end)) = (explicit_start, explicit_end) {
            return DateRange::new(start, end);
        }

        let start = self.window_start(period, today)?;
        debug!(%period, %start, end = %today, "Resolved trend window");
        DateRange::new(start, today)
    }

    fn window_start(&self, period: TrendPeriod, today: NaiveDate) -> AppResult<NaiveDate> {
        let start = match period {
            TrendPeriod::Daily => today.checked_sub_days(Days::new(
                u64::from(self.config.daily_window_days).saturating_sub(1),
            )),
            TrendPeriod::Weekly => today.checked_sub_days(Days::new(
                (u64::from(self.config.weekly_window_weeks) * 7).saturating_sub(1),
            )),
            TrendPeriod::Monthly => today.checked_sub_months(Months::new(
                self.config.monthly_window_months.saturating_sub(1),
            )),
        };

        start.ok_or_else(|| {
            AppError::internal(format!(
                "{period} window starting before {today} is outside the supported calendar"
            ))
        })
    }
}
