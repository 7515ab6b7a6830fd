//! Attempt-log replay tool
//!
//! Loads a JSON attempt log, feeds it through the aggregation engine, and
//! prints per-participant summaries. With `--rebuild` it also recomputes
//! every participant from scratch afterwards, which doubles as a repair
//! harness for drifted aggregates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use aggregator::{
    MemoryAttemptLog, MemoryScoreStore, ScoreAggregator, StaticParticipantDirectory,
};
use shared::{Attempt, ParticipantId, SessionId};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "scorekeeper")]
#[command(about = "Replay an attempt log and print session standings")]
struct Args {
    /// JSON file containing an array of attempts
    #[arg(long)]
    input: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Recompute every participant's aggregates from scratch after replay
    #[arg(long)]
    rebuild: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    shared::logging::init_tracing_with_level(Some(&args.log_level));
    shared::logging::log_startup("scorekeeper", "attempt log replay");

    let raw = tokio::fs::read_to_string(&args.input).await?;
    let attempts: Vec<Attempt> = serde_json::from_str(&raw)?;
    info!(count = attempts.len(), "📥 Loaded attempt log");

    let attempt_log = Arc::new(MemoryAttemptLog::new());
    attempt_log.extend(attempts.clone()).await;
    let store = Arc::new(MemoryScoreStore::new());
    let directory = Arc::new(StaticParticipantDirectory::new());

    let engine = ScoreAggregator::new(attempt_log, store.clone(), store, directory);

    let results = engine.submit_attempts(&attempts).await?;
    let applied = results.iter().filter(|r| r.is_applied()).count();
    info!(
        applied,
        ignored = results.len() - applied,
        "🏁 Replay finished"
    );

    // Distinct (session, participant) pairs in first-seen order.
    let mut pairs: Vec<(SessionId, ParticipantId)> = Vec::new();
    for attempt in &attempts {
        let pair = (attempt.session_id, attempt.participant_id);
        if !pairs.contains(&pair) {
            pairs.push(pair);
        }
    }

    if args.rebuild {
        for (session_id, participant_id) in &pairs {
            engine.rebuild(*session_id, *participant_id).await?;
        }
        info!(participants = pairs.len(), "🔁 Aggregates rebuilt");
    }

    let mut summaries = Vec::new();
    for (session_id, participant_id) in pairs {
        if let Some(summary) = engine.summarize(session_id, participant_id).await? {
            summaries.push(summary);
        }
    }

    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
