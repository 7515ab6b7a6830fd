//! In-memory high score and totals backend

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::AggregatorResult;
use crate::traits::{HighScoreStore, TotalsStore};
use crate::types::TotalsDelta;
use shared::{HighScore, ItemId, ParticipantId, SessionId, Totals};

/// In-memory backend serving both the high score and totals tables
///
/// One instance backs both traits so a single store handle can be handed to
/// the engine twice, the way a single database connection would be.
#[derive(Default)]
pub struct MemoryScoreStore {
    high_scores: RwLock<HashMap<(ItemId, ParticipantId), HighScore>>,
    totals: RwLock<HashMap<(SessionId, ParticipantId), Totals>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the highs a participant currently holds in a session
    pub async fn highs_for(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> Vec<HighScore> {
        let high_scores = self.high_scores.read().await;
        high_scores
            .values()
            .filter(|high| high.session_id == session_id && high.participant_id == participant_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl HighScoreStore for MemoryScoreStore {
    async fn get(
        &self,
        item_id: ItemId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<Option<HighScore>> {
        let high_scores = self.high_scores.read().await;
        Ok(high_scores.get(&(item_id, participant_id)).cloned())
    }

    async fn upsert(&self, high: HighScore) -> AggregatorResult<()> {
        let mut high_scores = self.high_scores.write().await;
        debug!(
            item_id = %high.item_id,
            participant_id = %high.participant_id,
            score = high.score,
            "storing high score"
        );
        high_scores.insert((high.item_id, high.participant_id), high);
        Ok(())
    }

    async fn delete_for_participant(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<()> {
        let mut high_scores = self.high_scores.write().await;
        high_scores.retain(|_, high| {
            high.session_id != session_id || high.participant_id != participant_id
        });
        Ok(())
    }
}

#[async_trait]
impl TotalsStore for MemoryScoreStore {
    async fn get(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<Option<Totals>> {
        let totals = self.totals.read().await;
        Ok(totals.get(&(session_id, participant_id)).cloned())
    }

    async fn apply(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
        delta: TotalsDelta,
    ) -> AggregatorResult<Totals> {
        let mut totals = self.totals.write().await;
        let row = totals
            .entry((session_id, participant_id))
            .or_insert_with(|| Totals::zeroed(session_id, participant_id));
        delta.apply_to(row);
        let row = row.clone();

        // A row that records nothing is indistinguishable from no row;
        // dropping it keeps reverted deltas free of residue.
        if row.is_empty() {
            totals.remove(&(session_id, participant_id));
        }

        Ok(row)
    }

    async fn delete(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<()> {
        let mut totals = self.totals.write().await;
        totals.remove(&(session_id, participant_id));
        Ok(())
    }
}
