//! Provider search clients and their aggregation.
//!
//! Concrete clients (JioSaavn, YouTube Music) implement [`TrackSearch`]
//! and live with the transport layer; this crate consumes them through
//! the trait only.

pub mod aggregator;
pub mod traits;
pub mod types;

pub use aggregator::MixedSearch;
pub use traits::TrackSearch;
pub use types::ProviderId;
