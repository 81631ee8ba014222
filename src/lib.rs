//! Music search aggregation across two streaming providers.
//!
//! Each provider client returns its own relevance-ordered track list;
//! the reconcile engine decides which hits from the two lists are the
//! same track, keeps the better representative, and merges the rest
//! into a single capped list. Provider clients implement
//! [`providers::TrackSearch`]; everything past that seam (transport,
//! auth, stream URL resolution) belongs to them, not to this crate.

pub mod models;
pub mod providers;
pub mod reconcile;

pub use models::Track;
pub use providers::{MixedSearch, ProviderId, TrackSearch};
pub use reconcile::{Reconciler, DEFAULT_LIMIT, MATCH_THRESHOLD};
