// ABOUTME: Storage boundary consumed by the analytics core
// ABOUTME: Activity log and preference row access with per-key serialized preference updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! # Storage Boundary
//!
//! The core does not own persistence. The surrounding service supplies an
//! [`ActivityStore`]; [`memory::InMemoryActivityStore`] is the reference
//! implementation used by tests and single-process deployments.
//!
//! Concurrent feedback for the same `(user, exercise)` pair is the only
//! contention point in the core. Implementations must run a
//! [`PreferenceMutation`] under a lock (or optimistic retry) scoped to that
//! pair so no update is lost.

/// In-memory store backed by sharded concurrent maps
pub mod memory;

use crate::errors::AppResult;
use crate::models::{ExercisePreference, WorkoutRecord};
use async_trait::async_trait;
use uuid::Uuid;

/// In-place update applied to a preference row while its key is locked
pub type PreferenceMutation<'a> = Box<dyn FnOnce(&mut ExercisePreference) + Send + 'a>;

/// Persistence collaborator for activity records and preference rows
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Append an entry to the user's activity log
    async fn append_record(&self, record: WorkoutRecord) -> AppResult<()>;

    /// All activity log entries for a user, in insertion order
    async fn get_user_records(&self, user_id: Uuid) -> AppResult<Vec<WorkoutRecord>>;

    /// Counter that advances on every append to the user's log
    ///
    /// Cached analytics computed under one revision are stale once it moves.
    async fn user_revision(&self, user_id: Uuid) -> AppResult<u64>;

    /// The preference row for `(user_id, exercise_name)`, creating the zero-valued default if absent
    async fn get_or_create_preference(
        &self,
        user_id: Uuid,
        exercise_name: &str,
    ) -> AppResult<ExercisePreference>;

    /// Apply `mutation` to the (lazily created) row while holding its per-key lock
    ///
    /// Returns the row as stored after the mutation.
    async fn modify_preference(
        &self,
        user_id: Uuid,
        exercise_name: &str,
        mutation: PreferenceMutation<'_>,
    ) -> AppResult<ExercisePreference>;

    /// Every preference row of a user
    async fn get_user_preferences(&self, user_id: Uuid) -> AppResult<Vec<ExercisePreference>>;
}
