//! Score aggregation engine facade
//!
//! Wires the tracker, totals, recalculator and projector together behind
//! the per-participant locking contract. This is the only entry point that
//! mutates aggregate state.

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{HighScoreTracker, Recalculator, SummaryProjector, TotalsAggregator};
use crate::error::AggregatorResult;
use crate::state::ParticipantLocks;
use crate::traits::{AttemptReader, HighScoreStore, ParticipantDirectory, TotalsStore};
use crate::types::{SubmissionResult, Summary};
use shared::{Attempt, ParticipantId, SessionId};

/// The score aggregation engine
pub struct ScoreAggregator {
    high_scores: HighScoreTracker,
    totals: TotalsAggregator,
    recalculator: Recalculator,
    projector: SummaryProjector,
    locks: ParticipantLocks,
}

impl ScoreAggregator {
    /// Create an engine over injected storage backends
    pub fn new(
        attempts: Arc<dyn AttemptReader>,
        high_score_store: Arc<dyn HighScoreStore>,
        totals_store: Arc<dyn TotalsStore>,
        directory: Arc<dyn ParticipantDirectory>,
    ) -> Self {
        let high_scores = HighScoreTracker::new(high_score_store);
        let totals = TotalsAggregator::new(Arc::clone(&totals_store));
        let recalculator = Recalculator::new(attempts, high_scores.clone(), totals.clone());
        let projector = SummaryProjector::new(totals_store, directory);

        Self {
            high_scores,
            totals,
            recalculator,
            projector,
            locks: ParticipantLocks::new(),
        }
    }

    /// Feed one attempt into aggregation.
    ///
    /// Incomplete attempts are ignored, not rejected: the submission
    /// pipeline records them, they just never affect standings. Completed
    /// attempts are applied atomically under the participant's exclusion.
    pub async fn submit_attempt(&self, attempt: &Attempt) -> AggregatorResult<SubmissionResult> {
        if !attempt.completed {
            debug!(attempt_id = %attempt.id, "skipping incomplete attempt");
            return Ok(SubmissionResult::Ignored);
        }

        let _guard = self
            .locks
            .acquire(attempt.session_id, attempt.participant_id)
            .await;

        let new_high = crate::core::apply_completed(&self.high_scores, &self.totals, attempt).await?;

        debug!(
            attempt_id = %attempt.id,
            session_id = %attempt.session_id,
            participant_id = %attempt.participant_id,
            score = attempt.score,
            new_high,
            "attempt applied"
        );

        Ok(SubmissionResult::Applied { new_high })
    }

    /// Feed a batch of attempts in order, returning one result per attempt.
    ///
    /// Stops at the first failure; everything already applied stays applied.
    pub async fn submit_attempts(&self, attempts: &[Attempt]) -> AggregatorResult<Vec<SubmissionResult>> {
        let mut results = Vec::with_capacity(attempts.len());
        for attempt in attempts {
            results.push(self.submit_attempt(attempt).await?);
        }
        Ok(results)
    }

    /// Rebuild one participant's aggregates from their full attempt
    /// history. Holds the participant's exclusion for the whole span, so
    /// live submissions wait instead of interleaving. Idempotent.
    pub async fn rebuild(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<()> {
        let _guard = self.locks.acquire(session_id, participant_id).await;
        info!(%session_id, %participant_id, "rebuilding aggregates from history");
        self.recalculator.rebuild(session_id, participant_id).await
    }

    /// Current standing for a participant, if they hold at least one high
    pub async fn summarize(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<Option<Summary>> {
        self.projector.project(session_id, participant_id).await
    }
}
