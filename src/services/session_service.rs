use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::session::{CompletedSurvey, SessionSnapshot};
use crate::models::survey::SurveySummary;
use crate::utils::token::generate_session_token;

const SESSION_TOKEN_LENGTH: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied,
    AlreadyListed,
    AlreadyCompleted,
    NotAvailable,
    NoSession,
}

/// Owner of every session snapshot. Handlers read clones; all writes go
/// through the methods below.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionSnapshot>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fresh snapshot and returns the token that addresses it.
    pub async fn create(&self, snapshot: SessionSnapshot) -> String {
        let token = generate_session_token(SESSION_TOKEN_LENGTH);
        self.sessions.write().await.insert(token.clone(), snapshot);
        token
    }

    pub async fn get(&self, token: &str) -> Option<SessionSnapshot> {
        self.sessions.read().await.get(token).cloned()
    }

    pub async fn remove(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    pub async fn append_available_survey(&self, token: &str, survey: SurveySummary) -> PatchOutcome {
        let mut sessions = self.sessions.write().await;
        let Some(snapshot) = sessions.get_mut(token) else {
            tracing::warn!("Survey {} not cached: session is gone", survey.survey_id);
            return PatchOutcome::NoSession;
        };
        if snapshot.available(survey.survey_id).is_some() {
            tracing::warn!("Survey {} already listed in session", survey.survey_id);
            return PatchOutcome::AlreadyListed;
        }
        snapshot.available_surveys.push(survey);
        PatchOutcome::Applied
    }

    /// Moves a survey from the available list into the completed list with
    /// its grade. Stale or duplicate completions leave the snapshot as is.
    pub async fn complete_survey(&self, token: &str, survey_id: i64, grade: i32) -> PatchOutcome {
        let mut sessions = self.sessions.write().await;
        let Some(snapshot) = sessions.get_mut(token) else {
            tracing::warn!("Completion of survey {} not cached: session is gone", survey_id);
            return PatchOutcome::NoSession;
        };
        if snapshot.completed(survey_id).is_some() {
            tracing::warn!(
                user_id = snapshot.user_id,
                "Survey {} is already in the completed list, skipping patch",
                survey_id
            );
            return PatchOutcome::AlreadyCompleted;
        }
        let Some(pos) = snapshot
            .available_surveys
            .iter()
            .position(|s| s.survey_id == survey_id)
        else {
            tracing::warn!(
                user_id = snapshot.user_id,
                "Survey {} is not in the available list, skipping patch",
                survey_id
            );
            return PatchOutcome::NotAvailable;
        };

        let survey = snapshot.available_surveys.remove(pos);
        snapshot.student_grades.push(CompletedSurvey {
            survey_id: survey.survey_id,
            survey_name: survey.survey_name,
            survey_on_discipline: Some(survey.survey_on_discipline),
            grade,
        });
        PatchOutcome::Applied
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}
