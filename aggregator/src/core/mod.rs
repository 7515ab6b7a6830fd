//! Core aggregation logic
//!
//! Storage-agnostic components: best-attempt tracking, totals maintenance,
//! from-scratch recomputation, and the read-only summary projection.

pub mod high_scores;
pub mod recalculator;
pub mod summary;
pub mod totals;

pub use high_scores::{Consideration, HighScoreTracker};
pub use recalculator::Recalculator;
pub use summary::SummaryProjector;
pub use totals::TotalsAggregator;

use tracing::error;

use crate::error::AggregatorResult;
use shared::Attempt;

/// Apply one completed attempt through the tracker and the totals as a
/// single unit. Callers hold the participant's exclusion for the duration.
///
/// The totals delta is computed from the previous high before the
/// replacement row is written; a failed high-score write is compensated by
/// applying the inverse delta so no partial change stays observable.
pub(crate) async fn apply_completed(
    high_scores: &HighScoreTracker,
    totals: &TotalsAggregator,
    attempt: &Attempt,
) -> AggregatorResult<bool> {
    let consideration = high_scores.consider(attempt).await?;
    totals.apply(attempt, &consideration).await?;

    if consideration.new_high {
        if let Err(err) = high_scores.record(attempt).await {
            if let Err(revert_err) = totals.revert(attempt, &consideration).await {
                error!(
                    attempt_id = %attempt.id,
                    session_id = %attempt.session_id,
                    participant_id = %attempt.participant_id,
                    error = %revert_err,
                    "totals compensation failed after high score write error; rebuild required"
                );
            }
            return Err(err);
        }
    }

    Ok(consideration.new_high)
}
