//! Read-only summary projection

use std::sync::Arc;

use crate::error::AggregatorResult;
use crate::traits::{ParticipantDirectory, TotalsStore};
use crate::types::Summary;
use shared::{ParticipantId, SessionId};

/// Produces the serializable view of a participant's current totals
#[derive(Clone)]
pub struct SummaryProjector {
    totals: Arc<dyn TotalsStore>,
    directory: Arc<dyn ParticipantDirectory>,
}

impl SummaryProjector {
    pub fn new(totals: Arc<dyn TotalsStore>, directory: Arc<dyn ParticipantDirectory>) -> Self {
        Self { totals, directory }
    }

    /// Project the current standing.
    ///
    /// `None` until the participant holds at least one high score; having
    /// no qualifying result yet is an expected state, not an error.
    pub async fn project(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<Option<Summary>> {
        let totals = match self.totals.get(session_id, participant_id).await? {
            Some(totals) if totals.completed_items > 0 => totals,
            _ => return Ok(None),
        };

        let participant = self.directory.lookup(participant_id).await?;
        let completed = totals.completed_items as f64;

        Ok(Some(Summary {
            session_id,
            participant,
            // Score accumulates across items; accuracy and performance
            // are per-item rates.
            score_total: totals.score_sum,
            accuracy_average: totals.accuracy_sum / completed,
            performance_average: totals.performance_sum / completed,
            attempts: totals.attempts,
            completed_items: totals.completed_items,
        }))
    }
}
