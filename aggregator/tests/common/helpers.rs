//! Helper utilities for integration tests

use std::sync::Arc;

use aggregator::{MemoryAttemptLog, MemoryScoreStore, ScoreAggregator, StaticParticipantDirectory, SubmissionResult, TotalsStore};
use shared::{Attempt, ParticipantId, SessionId};

/// Engine wired to in-memory backends, with handles kept for inspection
pub struct TestEngine {
    pub engine: Arc<ScoreAggregator>,
    pub store: Arc<MemoryScoreStore>,
    pub log: Arc<MemoryAttemptLog>,
}

/// Build an engine over fresh in-memory backends
pub fn build_engine() -> TestEngine {
    let log = Arc::new(MemoryAttemptLog::new());
    let store = Arc::new(MemoryScoreStore::new());
    let directory = Arc::new(StaticParticipantDirectory::new());

    let engine = Arc::new(ScoreAggregator::new(
        log.clone(),
        store.clone(),
        store.clone(),
        directory,
    ));

    TestEngine { engine, store, log }
}

impl TestEngine {
    /// Record the attempt in the history log and feed it to the engine,
    /// the way live traffic reaches both the pipeline and the aggregator
    pub async fn submit(&self, attempt: Attempt) -> SubmissionResult {
        self.log.push(attempt.clone()).await;
        self.engine.submit_attempt(&attempt).await.unwrap()
    }

    /// Assert that the totals row mirrors the currently-held high scores
    pub async fn assert_mirror_invariant(&self, session_id: SessionId, participant_id: ParticipantId) {
        let highs = self.store.highs_for(session_id, participant_id).await;
        let totals = TotalsStore::get(self.store.as_ref(), session_id, participant_id)
            .await
            .unwrap();

        let Some(totals) = totals else {
            assert!(highs.is_empty(), "high scores exist without a totals row");
            return;
        };

        let score_sum: u64 = highs.iter().map(|h| h.score).sum();
        let accuracy_sum: f64 = highs.iter().map(|h| h.accuracy).sum();
        let performance_sum: f64 = highs.iter().map(|h| h.performance).sum();

        assert_eq!(totals.score_sum, score_sum, "score sum does not mirror highs");
        assert!(
            (totals.accuracy_sum - accuracy_sum).abs() < 1e-9,
            "accuracy sum does not mirror highs"
        );
        assert!(
            (totals.performance_sum - performance_sum).abs() < 1e-9,
            "performance sum does not mirror highs"
        );
        assert_eq!(
            totals.completed_items,
            highs.len() as u64,
            "completed items does not mirror high count"
        );
        assert!(totals.attempts >= totals.completed_items);
    }
}
