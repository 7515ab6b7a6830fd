//! Shared types for the scorekeeper aggregation system
//!
//! Contains only the types that cross the submission/aggregation boundary.
//! Engine-internal types (deltas, submission results, summaries) are kept
//! in the aggregator crate.

pub mod entities;
pub mod errors;
pub mod logging;
pub mod types;

pub use entities::*;
pub use errors::*;
pub use types::*;
