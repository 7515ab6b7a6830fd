//! Repository and collaborator trait definitions for dependency injection
//!
//! All storage access is abstracted through these traits so the engine can
//! be exercised against in-memory backends and mocks. Implementations own
//! the storage mechanics; the engine owns the locking and delta contract.

use async_trait::async_trait;

use crate::error::AggregatorResult;
use crate::types::TotalsDelta;
use shared::{Attempt, AttemptId, HighScore, ItemId, ParticipantId, ParticipantInfo, SessionId, Totals};

/// Read access to the attempt history owned by the submission pipeline
#[mockall::automock]
#[async_trait]
pub trait AttemptReader: Send + Sync {
    /// All attempts for a participant in a session, ordered by completion
    /// time ascending. Replay depends on this ordering.
    async fn by_participant(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<Vec<Attempt>>;

    /// Fetch a single attempt by id
    async fn by_id(&self, id: AttemptId) -> AggregatorResult<Option<Attempt>>;
}

/// Best-attempt rows keyed by (item, participant)
#[mockall::automock]
#[async_trait]
pub trait HighScoreStore: Send + Sync {
    /// Current high for one item/participant, if any
    async fn get(
        &self,
        item_id: ItemId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<Option<HighScore>>;

    /// Insert or overwrite the row for the high's (item, participant)
    async fn upsert(&self, high: HighScore) -> AggregatorResult<()>;

    /// Remove every high a participant holds in a session
    async fn delete_for_participant(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<()>;
}

/// Running totals rows keyed by (session, participant)
#[mockall::automock]
#[async_trait]
pub trait TotalsStore: Send + Sync {
    /// Current totals row, if one has been created
    async fn get(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<Option<Totals>>;

    /// Apply a delta to the row as a single unit, creating a zeroed row
    /// first when absent. Returns the stored result.
    async fn apply(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
        delta: TotalsDelta,
    ) -> AggregatorResult<Totals>;

    /// Remove the totals row
    async fn delete(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> AggregatorResult<()>;
}

/// Identity lookup used only to attach display fields to summaries
#[mockall::automock]
#[async_trait]
pub trait ParticipantDirectory: Send + Sync {
    async fn lookup(&self, participant_id: ParticipantId) -> AggregatorResult<ParticipantInfo>;
}
