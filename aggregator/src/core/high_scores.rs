//! Best-attempt tracking per (item, participant)

use std::sync::Arc;

use crate::error::AggregatorResult;
use crate::traits::HighScoreStore;
use shared::{Attempt, HighScore, ParticipantId, SessionId};

/// Result of weighing an attempt against the stored high for its item
#[derive(Clone, Debug, PartialEq)]
pub struct Consideration {
    /// The row being superseded, if one existed
    pub previous: Option<HighScore>,
    /// Whether the attempt beats the stored high
    pub new_high: bool,
}

/// Tracks the single best attempt per participant per item
#[derive(Clone)]
pub struct HighScoreTracker {
    store: Arc<dyn HighScoreStore>,
}

impl HighScoreTracker {
    pub fn new(store: Arc<dyn HighScoreStore>) -> Self {
        Self { store }
    }

    /// Weigh an attempt against the stored high for its item.
    ///
    /// Does not write: the caller computes the totals delta from
    /// `previous` first and then persists the replacement via [`record`].
    ///
    /// [`record`]: HighScoreTracker::record
    pub async fn consider(&self, attempt: &Attempt) -> AggregatorResult<Consideration> {
        let previous = self.store.get(attempt.item_id, attempt.participant_id).await?;

        // Strictly greater wins; an equal score keeps the stored high.
        let new_high = match &previous {
            Some(high) => attempt.score > high.score,
            None => true,
        };

        Ok(Consideration { previous, new_high })
    }

    /// Persist the attempt as the new high for its item
    pub async fn record(&self, attempt: &Attempt) -> AggregatorResult<()> {
        self.store.upsert(HighScore::from_attempt(attempt)).await
    }

    /// Drop every high a participant holds in a session
    pub async fn clear(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<()> {
        self.store.delete_for_participant(session_id, participant_id).await
    }
}
