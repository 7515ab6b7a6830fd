//! Running totals maintenance
//!
//! Totals mirror the currently-held high scores: a superseded high is folded
//! out of the sums before its replacement is folded in, so nothing is ever
//! double-counted. Attempts that do not beat the stored high still count
//! toward the attempt total.

use std::sync::Arc;

use crate::core::high_scores::Consideration;
use crate::error::AggregatorResult;
use crate::traits::TotalsStore;
use crate::types::TotalsDelta;
use shared::{Attempt, ParticipantId, SessionId, Totals};

/// Maintains per-(session, participant) running sums and counts
#[derive(Clone)]
pub struct TotalsAggregator {
    store: Arc<dyn TotalsStore>,
}

impl TotalsAggregator {
    pub fn new(store: Arc<dyn TotalsStore>) -> Self {
        Self { store }
    }

    /// Build the delta one attempt contributes, given the stored high it
    /// was weighed against
    pub fn delta_for(attempt: &Attempt, consideration: &Consideration) -> TotalsDelta {
        let mut delta = TotalsDelta::one_attempt();

        if consideration.new_high {
            if let Some(previous) = &consideration.previous {
                delta.remove_high(previous);
            }
            delta.add_high(attempt);
        }

        delta
    }

    /// Apply one attempt's delta as a single unit
    pub async fn apply(
        &self,
        attempt: &Attempt,
        consideration: &Consideration,
    ) -> AggregatorResult<Totals> {
        let delta = Self::delta_for(attempt, consideration);
        self.store
            .apply(attempt.session_id, attempt.participant_id, delta)
            .await
    }

    /// Undo a previously applied delta (compensation after a failed
    /// high-score write)
    pub async fn revert(
        &self,
        attempt: &Attempt,
        consideration: &Consideration,
    ) -> AggregatorResult<Totals> {
        let delta = Self::delta_for(attempt, consideration).inverse();
        self.store
            .apply(attempt.session_id, attempt.participant_id, delta)
            .await
    }

    /// Current totals row, if one has been created
    pub async fn current(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<Option<Totals>> {
        self.store.get(session_id, participant_id).await
    }

    /// Remove the totals row for a participant
    pub async fn clear(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<()> {
        self.store.delete(session_id, participant_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryScoreStore;
    use shared::{AttemptId, HighScore, ItemId};

    fn attempt(score: u64, accuracy: f64, performance: f64) -> Attempt {
        Attempt {
            id: AttemptId::new(),
            session_id: SessionId(1),
            item_id: ItemId(10),
            participant_id: ParticipantId(100),
            score,
            accuracy,
            performance,
            completed: true,
            completed_at: chrono::Utc::now(),
        }
    }

    fn no_previous() -> Consideration {
        Consideration {
            previous: None,
            new_high: true,
        }
    }

    #[tokio::test]
    async fn test_first_high_creates_row_and_counts_item() {
        let store = Arc::new(MemoryScoreStore::new());
        let totals = TotalsAggregator::new(store);

        let played = attempt(100, 0.8, 50.0);
        let row = totals.apply(&played, &no_previous()).await.unwrap();

        assert_eq!(row.attempts, 1);
        assert_eq!(row.completed_items, 1);
        assert_eq!(row.score_sum, 100);
        assert_eq!(row.accuracy_sum, 0.8);
        assert_eq!(row.performance_sum, 50.0);
    }

    #[tokio::test]
    async fn test_non_high_attempt_only_increments_attempts() {
        let store = Arc::new(MemoryScoreStore::new());
        let totals = TotalsAggregator::new(store);

        let first = attempt(150, 0.95, 90.0);
        totals.apply(&first, &no_previous()).await.unwrap();

        let lower = attempt(120, 0.85, 60.0);
        let consideration = Consideration {
            previous: Some(HighScore::from_attempt(&first)),
            new_high: false,
        };
        let row = totals.apply(&lower, &consideration).await.unwrap();

        assert_eq!(row.attempts, 2);
        assert_eq!(row.completed_items, 1);
        assert_eq!(row.score_sum, 150);
        assert_eq!(row.accuracy_sum, 0.95);
    }

    #[tokio::test]
    async fn test_superseding_high_swaps_contribution() {
        let store = Arc::new(MemoryScoreStore::new());
        let totals = TotalsAggregator::new(store);

        let first = attempt(100, 0.8, 50.0);
        totals.apply(&first, &no_previous()).await.unwrap();

        let second = attempt(150, 0.95, 90.0);
        let consideration = Consideration {
            previous: Some(HighScore::from_attempt(&first)),
            new_high: true,
        };
        let row = totals.apply(&second, &consideration).await.unwrap();

        assert_eq!(row.attempts, 2);
        assert_eq!(row.completed_items, 1);
        assert_eq!(row.score_sum, 150);
        assert_eq!(row.accuracy_sum, 0.95);
        assert_eq!(row.performance_sum, 90.0);
    }

    #[tokio::test]
    async fn test_revert_restores_prior_state() {
        let store = Arc::new(MemoryScoreStore::new());
        let totals = TotalsAggregator::new(Arc::clone(&store) as Arc<dyn TotalsStore>);

        let played = attempt(100, 0.8, 50.0);
        totals.apply(&played, &no_previous()).await.unwrap();
        totals.revert(&played, &no_previous()).await.unwrap();

        let row = totals.current(SessionId(1), ParticipantId(100)).await.unwrap();
        assert!(row.is_none());
    }
}
