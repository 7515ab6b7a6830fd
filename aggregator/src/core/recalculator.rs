//! From-scratch aggregate recomputation
//!
//! Used out-of-band for data repair and backfill. Clearing and replaying the
//! full attempt history converges to the same state live traffic would have
//! produced, provided no live attempts interleave; the facade holds the
//! participant's exclusion across the whole span to guarantee that.

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::high_scores::HighScoreTracker;
use crate::core::totals::TotalsAggregator;
use crate::error::AggregatorResult;
use crate::traits::AttemptReader;
use shared::{ParticipantId, SessionId};

/// Rebuilds one participant's high scores and totals from raw history
#[derive(Clone)]
pub struct Recalculator {
    attempts: Arc<dyn AttemptReader>,
    high_scores: HighScoreTracker,
    totals: TotalsAggregator,
}

impl Recalculator {
    pub fn new(
        attempts: Arc<dyn AttemptReader>,
        high_scores: HighScoreTracker,
        totals: TotalsAggregator,
    ) -> Self {
        Self {
            attempts,
            high_scores,
            totals,
        }
    }

    /// Clear and replay a participant's history in completion order.
    ///
    /// An unknown participant or session replays an empty history: the
    /// deletes are no-ops and no totals row is created. Idempotent.
    pub async fn rebuild(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<()> {
        let history = self.attempts.by_participant(session_id, participant_id).await?;

        self.high_scores.clear(session_id, participant_id).await?;
        self.totals.clear(session_id, participant_id).await?;

        let mut replayed = 0usize;
        for attempt in history.iter().filter(|a| a.completed) {
            crate::core::apply_completed(&self.high_scores, &self.totals, attempt).await?;
            replayed += 1;
        }

        debug!(
            session_id = %session_id,
            participant_id = %participant_id,
            replayed,
            skipped = history.len() - replayed,
            "replayed attempt history"
        );
        info!(
            session_id = %session_id,
            participant_id = %participant_id,
            "aggregates rebuilt"
        );

        Ok(())
    }
}
