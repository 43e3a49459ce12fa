// ABOUTME: Main library entry point for the Ironlog personalization and analytics core
// ABOUTME: Wires the intelligence components to storage, caching, and logging boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

#![deny(unsafe_code)]

//! # Ironlog
//!
//! Personalization and analytics core of a fitness backend. It learns how
//! much a user likes each exercise and how well it works for them, scores
//! finished sessions, and answers historical questions about a user's
//! activity log: personal records, streaks, totals, and trend series.
//!
//! ## Architecture
//!
//! - **`ironlog-core`**: error types, constants, and domain models
//! - **`ironlog-intelligence`**: the pure, synchronous components
//!   (preference learner, session scorer, records analyzer, trend windows)
//! - **Storage**: the [`storage::ActivityStore`] boundary the core reads and writes through
//! - **Cache**: per-user caching of derived analytics
//! - **Services**: feedback ingestion and analytics query boundaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ironlog::cache::memory::InMemoryCache;
//! use ironlog::errors::AppResult;
//! use ironlog::intelligence::IntelligenceConfig;
//! use ironlog::services::AnalyticsService;
//! use ironlog::storage::memory::InMemoryActivityStore;
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = IntelligenceConfig::load()?;
//!     let store = Arc::new(InMemoryActivityStore::new());
//!     let analytics = AnalyticsService::new(store, InMemoryCache::new(&config.cache), &config);
//!
//!     let summary = analytics.records_summary_now(Uuid::new_v4()).await?;
//!     println!("current streak: {}", summary.streaks.current_streak);
//!     Ok(())
//! }
//! ```

/// Analytics result caching
pub mod cache;

/// Structured logging setup and domain event helpers
pub mod logging;

/// Feedback ingestion and analytics query services
pub mod services;

/// Activity log and preference storage boundary
pub mod storage;

pub use ironlog_core::{constants, errors, models};

/// Preference learning, session scoring, records analysis, and trend windows
pub use ironlog_intelligence as intelligence;
