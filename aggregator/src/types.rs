//! Aggregator-internal types

use serde::{Deserialize, Serialize};
use shared::{Attempt, HighScore, ParticipantInfo, SessionId, Totals};

/// Outcome of handing one attempt to the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The attempt was not completed; no state changed
    Ignored,
    /// The attempt entered aggregation
    Applied { new_high: bool },
}

impl SubmissionResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, SubmissionResult::Applied { .. })
    }

    pub fn is_new_high(&self) -> bool {
        matches!(self, SubmissionResult::Applied { new_high: true })
    }
}

/// Signed change applied to a totals row as a single unit
///
/// Either every field of the delta lands or none of it does; partial
/// application is never observable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TotalsDelta {
    pub attempts: i64,
    pub score: i64,
    pub accuracy: f64,
    pub performance: f64,
    pub completed_items: i64,
}

impl TotalsDelta {
    /// Delta counting one qualifying attempt and nothing else
    pub fn one_attempt() -> Self {
        Self {
            attempts: 1,
            ..Self::default()
        }
    }

    /// Fold a superseded high out of the running sums
    pub fn remove_high(&mut self, previous: &HighScore) {
        self.score -= previous.score as i64;
        self.accuracy -= previous.accuracy;
        self.performance -= previous.performance;
        self.completed_items -= 1;
    }

    /// Fold a new high into the running sums
    pub fn add_high(&mut self, attempt: &Attempt) {
        self.score += attempt.score as i64;
        self.accuracy += attempt.accuracy;
        self.performance += attempt.performance;
        self.completed_items += 1;
    }

    /// Delta that undoes this one
    pub fn inverse(&self) -> Self {
        Self {
            attempts: -self.attempts,
            score: -self.score,
            accuracy: -self.accuracy,
            performance: -self.performance,
            completed_items: -self.completed_items,
        }
    }

    /// Fold this delta into a stored row
    pub fn apply_to(&self, totals: &mut Totals) {
        totals.attempts = totals.attempts.saturating_add_signed(self.attempts);
        totals.score_sum = totals.score_sum.saturating_add_signed(self.score);
        totals.accuracy_sum += self.accuracy;
        totals.performance_sum += self.performance;
        totals.completed_items = totals.completed_items.saturating_add_signed(self.completed_items);
    }
}

/// Read-only projection of a participant's current standing
///
/// `score_total` is cumulative achievement across items, while accuracy and
/// performance are per-item rates; the two must not be collapsed into a
/// single averaging rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub session_id: SessionId,
    pub participant: ParticipantInfo,
    pub score_total: u64,
    pub accuracy_average: f64,
    pub performance_average: f64,
    pub attempts: u64,
    pub completed_items: u64,
}
