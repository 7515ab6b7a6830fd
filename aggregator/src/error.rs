//! Aggregator-specific error types

use shared::{ParticipantId, SessionId, SharedError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("Exclusive access lost for session {session_id}, participant {participant_id}: {message}")]
    ConcurrencyConflict {
        session_id: SessionId,
        participant_id: ParticipantId,
        message: String,
    },

    #[error("Store operation failed: {operation}")]
    StorageFailure { operation: String },

    #[error("Attempt history read failed: {message}")]
    AttemptReadError { message: String },

    #[error("Participant lookup failed: {participant_id}")]
    DirectoryError { participant_id: ParticipantId },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl AggregatorError {
    /// Whether the caller may retry the same operation unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, AggregatorError::ConcurrencyConflict { .. })
    }
}

pub type AggregatorResult<T> = Result<T, AggregatorError>;
