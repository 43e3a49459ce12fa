// ABOUTME: Core types and constants for the Ironlog personalization and analytics core
// ABOUTME: Foundation crate with the activity data model, error handling, and scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

#![deny(unsafe_code)]

//! # Ironlog Core
//!
//! Foundation crate providing shared types and constants for the Ironlog
//! personalization and analytics core. This crate is designed to change
//! infrequently, so the algorithm crate and the service layer can depend on it
//! without rebuilding on every algorithm change.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Compatibility-bearing scoring weights and label bands
//! - **models**: Activity log entries, session feedback, and exercise preferences

/// Unified error handling system with standard error codes
pub mod errors;

/// Scoring weights, label thresholds, and other domain constants
pub mod constants;

/// Core data models (`WorkoutRecord`, `SessionFeedbackInput`, `ExercisePreference`, etc.)
pub mod models;
