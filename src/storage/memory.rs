// ABOUTME: In-memory ActivityStore implementation using sharded concurrent maps
// ABOUTME: Per-key entry locks serialize concurrent updates to the same preference row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

use super::{ActivityStore, PreferenceMutation};
use crate::errors::AppResult;
use crate::models::{ExercisePreference, WorkoutRecord};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

type PreferenceKey = (Uuid, String);

/// In-memory activity store
///
/// Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityStore {
    records: Arc<DashMap<Uuid, Vec<WorkoutRecord>>>,
    preferences: Arc<DashMap<PreferenceKey, ExercisePreference>>,
}

impl InMemoryActivityStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = WorkoutRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store
                .records
                .entry(record.user_id)
                .or_default()
                .push(record);
        }
        store
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn append_record(&self, record: WorkoutRecord) -> AppResult<()> {
        self.records.entry(record.user_id).or_default().push(record);
        Ok(())
    }

    async fn get_user_records(&self, user_id: Uuid) -> AppResult<Vec<WorkoutRecord>> {
        Ok(self
            .records
            .get(&user_id)
            .map(|records| records.value().clone())
            .unwrap_or_default())
    }

    async fn user_revision(&self, user_id: Uuid) -> AppResult<u64> {
        // The log is append-only, so its length is a monotonic revision
        let len = self.records.get(&user_id).map_or(0, |records| records.len());
        Ok(u64::try_from(len).unwrap_or(u64::MAX))
    }

    async fn get_or_create_preference(
        &self,
        user_id: Uuid,
        exercise_name: &str,
    ) -> AppResult<ExercisePreference> {
        let entry = self
            .preferences
            .entry((user_id, exercise_name.to_owned()))
            .or_insert_with(|| ExercisePreference::new(user_id, exercise_name));
        Ok(entry.value().clone())
    }

    async fn modify_preference(
        &self,
        user_id: Uuid,
        exercise_name: &str,
        mutation: PreferenceMutation<'_>,
    ) -> AppResult<ExercisePreference> {
        // The entry guard holds the shard write lock until the mutation returns
        let mut entry = self
            .preferences
            .entry((user_id, exercise_name.to_owned()))
            .or_insert_with(|| ExercisePreference::new(user_id, exercise_name));
        mutation(entry.value_mut());
        Ok(entry.value().clone())
    }

    async fn get_user_preferences(&self, user_id: Uuid) -> AppResult<Vec<ExercisePreference>> {
        let mut preferences: Vec<ExercisePreference> = self
            .preferences
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        preferences.sort_by(|a, b| a.exercise_name.cmp(&b.exercise_name));
        Ok(preferences)
    }
}
