//! Two-provider search aggregation.
//!
//! Queries both providers concurrently, downgrades a failed or slow
//! provider to an empty list, and reconciles the two lists into one.
//! The provider order given at construction is fixed: the primary
//! provider drives match order and wins selection ties.

use std::sync::Arc;
use std::time::Duration;

use crate::models::Track;
use crate::providers::traits::TrackSearch;
use crate::providers::types::ProviderId;
use crate::reconcile::{Reconciler, DEFAULT_LIMIT};

/// How long a provider may take before its results are dropped for the
/// current query.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Smart search over a fixed pair of providers.
pub struct MixedSearch {
    primary: Arc<dyn TrackSearch>,
    secondary: Arc<dyn TrackSearch>,
    reconciler: Reconciler,
    provider_timeout: Duration,
}

impl MixedSearch {
    pub fn new(primary: Arc<dyn TrackSearch>, secondary: Arc<dyn TrackSearch>) -> Self {
        log::info!(
            "Mixed search over {} (primary) + {} (secondary)",
            primary.name(),
            secondary.name()
        );
        Self {
            primary,
            secondary,
            reconciler: Reconciler::new(),
            provider_timeout: PROVIDER_TIMEOUT,
        }
    }

    /// Override the per-provider fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Search both providers and reconcile into one deduplicated list
    /// of at most `limit` tracks.
    ///
    /// Never fails: a provider that errors or times out simply
    /// contributes nothing to this query.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<Track> {
        let (from_primary, from_secondary) = tokio::join!(
            self.fetch(&self.primary, query, limit),
            self.fetch(&self.secondary, query, limit),
        );
        self.reconciler
            .reconcile(query, from_primary, from_secondary, limit)
    }

    /// [`search`](Self::search) with the default result cap.
    pub async fn search_default(&self, query: &str) -> Vec<Track> {
        self.search(query, DEFAULT_LIMIT).await
    }

    /// Both providers' results side by side with no matching, primary
    /// first. `limit` caps each provider's list, not the combined one.
    pub async fn search_all(&self, query: &str, limit: usize) -> Vec<Track> {
        let (from_primary, from_secondary) = tokio::join!(
            self.fetch(&self.primary, query, limit),
            self.fetch(&self.secondary, query, limit),
        );
        let mut results = from_primary;
        results.extend(from_secondary);
        results
    }

    /// Results from a single provider.
    pub async fn search_provider(&self, id: ProviderId, query: &str, limit: usize) -> Vec<Track> {
        if self.primary.id() == id {
            self.fetch(&self.primary, query, limit).await
        } else if self.secondary.id() == id {
            self.fetch(&self.secondary, query, limit).await
        } else {
            log::warn!("no registered client for provider {}", id);
            Vec::new()
        }
    }

    async fn fetch(&self, provider: &Arc<dyn TrackSearch>, query: &str, limit: usize) -> Vec<Track> {
        match tokio::time::timeout(self.provider_timeout, provider.search(query, limit)).await {
            Ok(Ok(tracks)) => {
                log::debug!("{} returned {} track(s)", provider.name(), tracks.len());
                tracks
            }
            Ok(Err(e)) => {
                log::warn!("{} search failed: {}", provider.name(), e);
                Vec::new()
            }
            Err(_) => {
                log::warn!(
                    "{} search timed out after {:?}",
                    provider.name(),
                    self.provider_timeout
                );
                Vec::new()
            }
        }
    }
}
