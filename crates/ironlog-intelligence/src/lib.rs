// ABOUTME: Personalization and analytics engine for the Ironlog fitness backend
// ABOUTME: Preference learning, session scoring, records analysis, and trend windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

#![deny(unsafe_code)]

//! # Ironlog Intelligence
//!
//! The four pure, synchronous components of the personalization and analytics
//! core, plus trend aggregation:
//!
//! - [`PreferenceLearner`]: EMA updates of per-user, per-exercise preference and effectiveness
//! - [`SessionScorer`]: composite success score of a finished session
//! - [`RecordsAnalyzer`]: personal records, streaks, and cumulative totals
//! - [`TrendWindowResolver`]: symbolic period to concrete date range
//! - [`TrendAggregator`]: bucketed trend series over a resolved range
//!
//! None of the components hold shared mutable state; each call reads its
//! inputs, computes, and returns.

/// Configuration for the intelligence components
pub mod config;

/// Online preference and effectiveness learning
pub mod preference_learner;

/// Personal records, streaks, and cumulative totals
pub mod records_analyzer;

/// Session success scoring
pub mod session_scorer;

/// Bucketed trend series
pub mod trend_aggregator;

/// Trend window resolution
pub mod trend_window;

pub use config::{
    AnalyticsCacheConfig, ConfigError, IntelligenceConfig, PreferenceLearnerConfig,
    TrendWindowConfig,
};
pub use preference_learner::{PreferenceLearner, PreferenceSnapshot};
pub use records_analyzer::{
    CumulativeStats, PersonalRecord, PersonalRecords, RecordsAnalyzer, RecordsSummary,
    StreakSummary,
};
pub use session_scorer::{ScoreBreakdown, SessionScorer};
pub use trend_aggregator::{TrendAggregator, TrendBucket, TrendSeries};
pub use trend_window::TrendWindowResolver;
