use crate::models::Track;
use crate::providers::ProviderId;
use anyhow::Result;
use async_trait::async_trait;

/// A provider's track-search client.
///
/// Implementations own transport, auth, and reshaping the provider's
/// native response; by the time results leave this trait they are plain
/// [`Track`]s in the provider's relevance order.
#[async_trait]
pub trait TrackSearch: Send + Sync {
    /// Which provider this client talks to.
    fn id(&self) -> ProviderId;

    /// User-friendly name for logs.
    fn name(&self) -> &str;

    /// Search for tracks, returning at most `limit` results in the
    /// provider's relevance order.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Track>>;
}
