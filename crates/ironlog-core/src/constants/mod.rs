// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Scoring weights, label band thresholds, and learner defaults for Ironlog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! Constants module
//!
//! The success-score weights and the label bands are compatibility-bearing:
//! stored scores and displayed labels must match values produced by earlier
//! deployments, so they live here as constants rather than in configuration.

/// Session success scoring
pub mod scoring {
    /// Weight of the completion rate component
    pub const COMPLETION_WEIGHT: f64 = 0.4;
    /// Weight of the perceived difficulty component
    pub const DIFFICULTY_WEIGHT: f64 = 0.3;
    /// Weight of the satisfaction component
    pub const SATISFACTION_WEIGHT: f64 = 0.3;
    /// Difficulty rating perceived as "just right"
    pub const IDEAL_DIFFICULTY: f64 = 3.0;
    /// Distance from the ideal difficulty at which the component reaches zero
    pub const DIFFICULTY_FALLOFF: f64 = 2.0;
    /// Upper bound of a composite success score
    pub const MAX_SUCCESS_SCORE: f64 = 1.0;
}

/// Ordinal rating scales
pub mod ratings {
    /// Lowest difficulty / satisfaction / energy / soreness rating
    pub const MIN_RATING: u8 = 1;
    /// Highest difficulty / satisfaction / energy / soreness rating
    pub const MAX_RATING: u8 = 5;
    /// Neutral satisfaction rating
    pub const NEUTRAL_SATISFACTION: f64 = 3.0;
    /// Lowest perceived exertion (RPE) value
    pub const MIN_RPE: u8 = 1;
    /// Highest perceived exertion (RPE) value
    pub const MAX_RPE: u8 = 10;
}

/// Preference model bounds and defaults
pub mod preference {
    /// Lower bound of a preference score
    pub const MIN_PREFERENCE_SCORE: f64 = -1.0;
    /// Upper bound of a preference score
    pub const MAX_PREFERENCE_SCORE: f64 = 1.0;
    /// Lower bound of an effectiveness score
    pub const MIN_EFFECTIVENESS_SCORE: f64 = 0.0;
    /// Upper bound of an effectiveness score
    pub const MAX_EFFECTIVENESS_SCORE: f64 = 1.0;
    /// Learning rate used when the caller does not supply one
    pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
    /// Number of preference updates at which confidence saturates
    pub const CONFIDENCE_SATURATION_POINTS: f64 = 6.0;
}

/// Lower bounds of the preference label bands, evaluated top-down
pub mod preference_bands {
    /// "very favored" at or above this score
    pub const VERY_FAVORED_MIN: f64 = 0.6;
    /// "favored" at or above this score
    pub const FAVORED_MIN: f64 = 0.2;
    /// "neutral" at or above this score
    pub const NEUTRAL_MIN: f64 = -0.2;
    /// "disfavored" at or above this score; anything lower is "very disfavored"
    pub const DISFAVORED_MIN: f64 = -0.6;
}

/// Trend window defaults
pub mod trend_windows {
    /// Days covered by the `daily` period, today inclusive
    pub const DAILY_WINDOW_DAYS: u32 = 5;
    /// Weeks covered by the `weekly` period
    pub const WEEKLY_WINDOW_WEEKS: u32 = 4;
    /// Months covered by the `monthly` period
    pub const MONTHLY_WINDOW_MONTHS: u32 = 3;
}

/// Analytics cache defaults
pub mod cache {
    /// Time-to-live for cached analytics results
    pub const DEFAULT_ANALYTICS_TTL_SECS: u64 = 300;
    /// Maximum cached analytics entries
    pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1000;
}

/// Service identification for structured logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const IRONLOG: &str = "ironlog";
}
