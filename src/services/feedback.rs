// ABOUTME: Feedback ingestion service turning a finished session into model updates
// ABOUTME: Validates feedback, scores the session, and updates each exercise's preference row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

use crate::errors::AppResult;
use crate::intelligence::{
    IntelligenceConfig, PreferenceLearner, PreferenceSnapshot, ScoreBreakdown, SessionScorer,
};
use crate::logging::AnalyticsLogger;
use crate::models::{
    DifficultyLabel, ExercisePreference, SatisfactionLabel, SessionDetail, SessionFeedbackInput,
};
use crate::storage::ActivityStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Result of ingesting one session's feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackOutcome {
    /// Session the feedback belongs to
    pub session_id: Uuid,
    /// Composite success score; `0.0` when any scoring input is missing
    pub success_score: f64,
    /// Weighted components, present only when the score is fully defined
    pub breakdown: Option<ScoreBreakdown>,
    /// Display label of the difficulty rating
    pub difficulty_label: DifficultyLabel,
    /// Display label of the satisfaction rating
    pub satisfaction_label: SatisfactionLabel,
    /// Preference rows after the update, one per distinct exercise
    pub preferences: Vec<PreferenceSnapshot>,
}

/// Ingests session feedback and feeds the preference model
pub struct FeedbackService<S: ActivityStore> {
    store: Arc<S>,
    learner: PreferenceLearner,
}

impl<S: ActivityStore> FeedbackService<S> {
    /// Create a service over `store` with the learner tuned by `config`
    #[must_use]
    pub fn new(store: Arc<S>, config: &IntelligenceConfig) -> Self {
        Self {
            store,
            learner: PreferenceLearner::with_config(config.preference.clone()),
        }
    }

    /// Score a session's feedback and update the preference row of every exercise in it
    ///
    /// Each distinct exercise name is updated once, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the feedback is out of range, or a storage
    /// error if a preference row cannot be updated
    pub async fn ingest_feedback(
        &self,
        user_id: Uuid,
        session_id: Uuid,
        exercise_names: &[String],
        feedback: &SessionFeedbackInput,
    ) -> AppResult<FeedbackOutcome> {
        feedback.validate()?;

        let breakdown = SessionScorer::breakdown(
            feedback.completion_rate,
            feedback.overall_difficulty,
            feedback.satisfaction,
        );
        let success_score = breakdown.map_or(0.0, |b| b.total);

        let preference_sample = PreferenceLearner::satisfaction_signal(feedback.satisfaction);
        let effectiveness_sample = breakdown.map(|b| b.total);

        let mut seen = HashSet::new();
        let mut preferences = Vec::new();
        for name in exercise_names {
            if !seen.insert(name.as_str()) {
                continue;
            }

            let learner = &self.learner;
            let updated = self
                .store
                .modify_preference(
                    user_id,
                    name,
                    Box::new(move |pref: &mut ExercisePreference| {
                        learner.update_preference(pref, preference_sample, None);
                        learner.update_effectiveness(pref, effectiveness_sample, None);
                    }),
                )
                .await?;
            preferences.push(self.learner.snapshot(&updated));
        }

        AnalyticsLogger::log_feedback_ingested(user_id, session_id, success_score, preferences.len());

        Ok(FeedbackOutcome {
            session_id,
            success_score,
            breakdown,
            difficulty_label: SessionScorer::difficulty_label(feedback.overall_difficulty),
            satisfaction_label: SessionScorer::satisfaction_label(feedback.satisfaction),
            preferences,
        })
    }

    /// Ingest the feedback attached to a structured session payload
    ///
    /// A session without feedback is a no-op: the outcome carries a zero score,
    /// unrated labels, and no snapshots.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if an execution's RPE or the feedback is out of
    /// range, or a storage error if a preference row cannot be updated
    pub async fn submit_session(
        &self,
        user_id: Uuid,
        session: &SessionDetail,
    ) -> AppResult<FeedbackOutcome> {
        for execution in &session.executions {
            execution.validate()?;
        }

        let Some(feedback) = session.feedback.as_ref() else {
            debug!(user.id = %user_id, session.id = %session.session_id, "Session has no feedback");
            return Ok(FeedbackOutcome {
                session_id: session.session_id,
                success_score: 0.0,
                breakdown: None,
                difficulty_label: DifficultyLabel::Unrated,
                satisfaction_label: SatisfactionLabel::Unrated,
                preferences: Vec::new(),
            });
        };

        let exercise_names: Vec<String> = session
            .executions
            .iter()
            .map(|execution| execution.exercise_name.clone())
            .collect();
        self.ingest_feedback(user_id, session.session_id, &exercise_names, feedback)
            .await
    }

    /// Snapshots of every learned preference of a user, ordered by exercise name
    ///
    /// # Errors
    ///
    /// Returns a storage error if the rows cannot be read
    pub async fn preferences(&self, user_id: Uuid) -> AppResult<Vec<PreferenceSnapshot>> {
        let rows = self.store.get_user_preferences(user_id).await?;
        Ok(rows.iter().map(|row| self.learner.snapshot(row)).collect())
    }
}
