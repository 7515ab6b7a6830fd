//! Aggregation data model
//!
//! `Attempt` is owned by the upstream submission pipeline and is read-only
//! here. `HighScore` and `Totals` are owned by the aggregation engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AttemptId, ItemId, ParticipantId, SessionId};

/// Immutable record of one play of an item by a participant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub id: AttemptId,
    pub session_id: SessionId,
    pub item_id: ItemId,
    pub participant_id: ParticipantId,
    pub score: u64,
    /// Fraction in 0..=1
    pub accuracy: f64,
    /// Performance rating awarded for this attempt
    pub performance: f64,
    /// Only completed attempts enter aggregation
    pub completed: bool,
    /// When the attempt was deemed completed; drives replay ordering
    pub completed_at: DateTime<Utc>,
}

/// Best attempt recorded so far for one (item, participant)
///
/// Created on the first qualifying attempt, overwritten whenever a strictly
/// higher score arrives, and only ever deleted by a rebuild.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighScore {
    pub session_id: SessionId,
    pub item_id: ItemId,
    pub participant_id: ParticipantId,
    pub score: u64,
    pub accuracy: f64,
    pub performance: f64,
    pub source_attempt_id: AttemptId,
}

impl HighScore {
    /// The row an attempt stores when it becomes the new high
    pub fn from_attempt(attempt: &Attempt) -> Self {
        Self {
            session_id: attempt.session_id,
            item_id: attempt.item_id,
            participant_id: attempt.participant_id,
            score: attempt.score,
            accuracy: attempt.accuracy,
            performance: attempt.performance,
            source_attempt_id: attempt.id,
        }
    }
}

/// Running per-participant aggregate for a session
///
/// The sums always mirror the participant's currently-held high scores,
/// never the raw attempt history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub session_id: SessionId,
    pub participant_id: ParticipantId,
    pub score_sum: u64,
    pub accuracy_sum: f64,
    pub performance_sum: f64,
    /// Every qualifying attempt counts here, new high or not
    pub attempts: u64,
    /// Distinct items for which a high score currently exists
    pub completed_items: u64,
}

impl Totals {
    /// Zero-valued, not-yet-persisted row for the read-or-create pattern
    pub fn zeroed(session_id: SessionId, participant_id: ParticipantId) -> Self {
        Self {
            session_id,
            participant_id,
            score_sum: 0,
            accuracy_sum: 0.0,
            performance_sum: 0.0,
            attempts: 0,
            completed_items: 0,
        }
    }

    /// Whether the row records nothing that would need to be persisted
    pub fn is_empty(&self) -> bool {
        self.attempts == 0 && self.completed_items == 0
    }
}
