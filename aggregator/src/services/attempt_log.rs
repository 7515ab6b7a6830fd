//! In-memory attempt history
//!
//! The submission pipeline owns attempts; this backend keeps a loaded log
//! around for replay tooling and tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AggregatorResult;
use crate::traits::AttemptReader;
use shared::{Attempt, AttemptId, ParticipantId, SessionId};

/// Append-only in-memory attempt log
#[derive(Default)]
pub struct MemoryAttemptLog {
    attempts: RwLock<Vec<Attempt>>,
}

impl MemoryAttemptLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, attempt: Attempt) {
        let mut attempts = self.attempts.write().await;
        attempts.push(attempt);
    }

    pub async fn extend(&self, new_attempts: Vec<Attempt>) {
        let mut attempts = self.attempts.write().await;
        attempts.extend(new_attempts);
    }

    pub async fn len(&self) -> usize {
        self.attempts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.attempts.read().await.is_empty()
    }
}

#[async_trait]
impl AttemptReader for MemoryAttemptLog {
    async fn by_participant(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<Vec<Attempt>> {
        let attempts = self.attempts.read().await;
        let mut matching: Vec<Attempt> = attempts
            .iter()
            .filter(|a| a.session_id == session_id && a.participant_id == participant_id)
            .cloned()
            .collect();

        // Stable sort: equal timestamps keep insertion order.
        matching.sort_by_key(|a| a.completed_at);
        Ok(matching)
    }

    async fn by_id(&self, id: AttemptId) -> AggregatorResult<Option<Attempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts.iter().find(|a| a.id == id).cloned())
    }
}
