//! Test fixtures and data for integration tests

use chrono::{DateTime, Duration, TimeZone, Utc};

use shared::{Attempt, AttemptId, ItemId, ParticipantId, SessionId};

/// Standard ids used across the integration suite
pub const SESSION: SessionId = SessionId(1);
pub const PLAYER: ParticipantId = ParticipantId(100);
pub const RIVAL: ParticipantId = ParticipantId(200);

pub const ITEM_A: ItemId = ItemId(10);
pub const ITEM_B: ItemId = ItemId(20);

/// Common baseline for attempt timestamps
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

/// Fully specified completed attempt, `sequence` seconds after the baseline
pub fn attempt(
    participant: ParticipantId,
    item: ItemId,
    score: u64,
    accuracy: f64,
    performance: f64,
    sequence: i64,
) -> Attempt {
    Attempt {
        id: AttemptId::new(),
        session_id: SESSION,
        item_id: item,
        participant_id: participant,
        score,
        accuracy,
        performance,
        completed: true,
        completed_at: base_time() + Duration::seconds(sequence),
    }
}

/// Attempt that was abandoned before completion
pub fn abandoned(participant: ParticipantId, item: ItemId, score: u64, sequence: i64) -> Attempt {
    Attempt {
        completed: false,
        ..attempt(participant, item, score, 0.5, 10.0, sequence)
    }
}
