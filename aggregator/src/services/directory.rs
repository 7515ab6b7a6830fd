//! Participant identity lookup backends

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AggregatorResult;
use crate::traits::ParticipantDirectory;
use shared::{ParticipantId, ParticipantInfo};

/// Directory backed by a fixed set of registered participants
///
/// Unregistered ids resolve to a placeholder name rather than failing;
/// summaries must not depend on directory completeness.
#[derive(Default)]
pub struct StaticParticipantDirectory {
    participants: RwLock<HashMap<ParticipantId, ParticipantInfo>>,
}

impl StaticParticipantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, info: ParticipantInfo) {
        let mut participants = self.participants.write().await;
        participants.insert(info.id, info);
    }
}

#[async_trait]
impl ParticipantDirectory for StaticParticipantDirectory {
    async fn lookup(&self, participant_id: ParticipantId) -> AggregatorResult<ParticipantInfo> {
        let participants = self.participants.read().await;
        Ok(participants
            .get(&participant_id)
            .cloned()
            .unwrap_or_else(|| {
                ParticipantInfo::new(participant_id, format!("participant-{participant_id}"))
            }))
    }
}
