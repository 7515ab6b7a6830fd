//! Engine state management
//!
//! The unit of exclusive access is one `(session, participant)` pair: every
//! read-modify-write across that participant's high scores and totals runs
//! under the pair's mutex, while different participants proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use shared::{ParticipantId, SessionId};

/// Registry of per-(session, participant) mutexes
#[derive(Default)]
pub struct ParticipantLocks {
    locks: RwLock<HashMap<(SessionId, ParticipantId), Arc<Mutex<()>>>>,
}

impl ParticipantLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire exclusive access to one participant's rows.
    ///
    /// Waiters are served in arrival order, which preserves per-participant
    /// submission order; a rebuild holding the guard makes concurrent live
    /// submissions wait rather than interleave.
    pub async fn acquire(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> OwnedMutexGuard<()> {
        let key = (session_id, participant_id);

        let existing = {
            let locks = self.locks.read().await;
            locks.get(&key).cloned()
        };

        let lock = match existing {
            Some(lock) => lock,
            None => {
                let mut locks = self.locks.write().await;
                Arc::clone(locks.entry(key).or_insert_with(|| Arc::new(Mutex::new(()))))
            }
        };

        lock.lock_owned().await
    }

    /// Number of participants a lock has been created for
    pub async fn tracked_participants(&self) -> usize {
        self.locks.read().await.len()
    }
}
