//! Tests for the JSON attempt-log format consumed by the replay tool

use std::io::Write;

use chrono::{TimeZone, Utc};
use shared::{Attempt, AttemptId, ItemId, ParticipantId, SessionId};

fn sample_attempt() -> Attempt {
    Attempt {
        id: AttemptId::new(),
        session_id: SessionId(1),
        item_id: ItemId(10),
        participant_id: ParticipantId(100),
        score: 150,
        accuracy: 0.95,
        performance: 90.0,
        completed: true,
        completed_at: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
    }
}

#[test]
fn test_attempt_log_round_trips_through_json() {
    let attempts = vec![sample_attempt(), sample_attempt()];

    let encoded = serde_json::to_string_pretty(&attempts).unwrap();
    let decoded: Vec<Attempt> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, attempts);
}

#[test]
fn test_attempt_log_is_readable_from_a_file() {
    let attempts = vec![sample_attempt()];
    let encoded = serde_json::to_string(&attempts).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(encoded.as_bytes()).unwrap();

    let raw = std::fs::read_to_string(file.path()).unwrap();
    let decoded: Vec<Attempt> = serde_json::from_str(&raw).unwrap();

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].score, 150);
    assert!(decoded[0].completed);
}

#[test]
fn test_extra_fields_are_ignored() {
    // Upstream pipelines may attach extra fields; the log reader ignores them.
    let raw = r#"[{
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "session_id": 1,
        "item_id": 10,
        "participant_id": 100,
        "score": 100,
        "accuracy": 0.8,
        "performance": 50.0,
        "completed": true,
        "completed_at": "2026-01-15T12:00:00Z",
        "client_version": "7.2.1"
    }]"#;

    let decoded: Vec<Attempt> = serde_json::from_str(raw).unwrap();
    assert_eq!(decoded[0].participant_id, ParticipantId(100));
}
