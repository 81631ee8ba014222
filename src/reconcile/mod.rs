//! Cross-provider result reconciliation.
//!
//! Decides which candidates from the two providers' result lists are
//! the same track, keeps the representative that matches the user's
//! query better, and merges everything into one ordered, capped list.

pub mod engine;
pub mod scorer;
pub mod types;

pub use engine::{comparison_key, Reconciler, DEFAULT_LIMIT, MATCH_THRESHOLD};
pub use types::{MatchOutcome, MatchPair};
