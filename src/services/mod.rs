// ABOUTME: Boundary services that connect the intelligence components to storage and cache
// ABOUTME: Feedback ingestion and analytics queries, reusable by any transport layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! Domain service layer
//!
//! Transport-agnostic orchestration. Each service owns no state beyond its
//! collaborators; the intelligence components it calls are pure.

/// Records summaries, trend windows, and trend series with per-user caching
pub mod analytics;

/// Session feedback ingestion: scoring plus preference learning
pub mod feedback;

pub use analytics::AnalyticsService;
pub use feedback::{FeedbackOutcome, FeedbackService};
