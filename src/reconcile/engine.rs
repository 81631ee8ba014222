//! Reconciliation engine implementation.
//!
//! Takes the two providers' already-fetched result lists and produces
//! one merged list:
//! 1. Pair up candidates that look like the same track (greedy, primary
//!    list drives the order)
//! 2. For each pair, keep whichever side matches the user's query better
//! 3. Emit winners and unmatched primary results in primary order, then
//!    unmatched secondary results, capped at the requested limit
//!
//! The whole pass is pure and synchronous; provider fetching happens in
//! [`crate::providers::MixedSearch`].

use std::collections::HashMap;

use crate::models::Track;
use crate::reconcile::scorer::similarity;
use crate::reconcile::types::{MatchOutcome, MatchPair};

/// Minimum similarity (exclusive) for two candidates to be treated as
/// the same track.
pub const MATCH_THRESHOLD: u8 = 80;

/// Result-list cap applied when the caller does not supply one.
pub const DEFAULT_LIMIT: usize = 10;

/// Comparison key for a candidate: trimmed, lowercased title and artist
/// joined with a single space. Missing fields contribute an empty
/// string, so this never fails.
pub fn comparison_key(track: &Track) -> String {
    format!(
        "{} {}",
        track.title.trim().to_lowercase(),
        track.artist.trim().to_lowercase()
    )
}

/// Cross-provider result reconciler.
///
/// Stateless apart from the acceptance threshold; create one per call
/// site and reuse freely.
pub struct Reconciler {
    threshold: u8,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconciler {
    pub fn new() -> Self {
        Self {
            threshold: MATCH_THRESHOLD,
        }
    }

    /// Override the acceptance threshold. Matching still requires a
    /// score strictly greater than the given value.
    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Merge two providers' result lists into one deduplicated list of
    /// at most `limit` tracks.
    ///
    /// `primary` drives the output order and wins selection ties;
    /// unmatched `secondary` results are appended after it.
    pub fn reconcile(
        &self,
        query: &str,
        primary: Vec<Track>,
        secondary: Vec<Track>,
        limit: usize,
    ) -> Vec<Track> {
        if limit == 0 || (primary.is_empty() && secondary.is_empty()) {
            return Vec::new();
        }
        // The matcher is asymmetric, so an empty primary list cannot
        // fall through to the generic path.
        if primary.is_empty() {
            log::debug!("only the secondary provider returned results for '{}'", query);
            return truncated(secondary, limit);
        }
        if secondary.is_empty() {
            log::debug!("only the primary provider returned results for '{}'", query);
            return truncated(primary, limit);
        }

        let outcome = self.pair_candidates(&primary, &secondary);
        let by_left: HashMap<usize, MatchPair> =
            outcome.pairs.iter().map(|p| (p.left, *p)).collect();

        let mut right_slots: Vec<Option<Track>> = secondary.into_iter().map(Some).collect();
        let mut merged = Vec::new();

        for (i, candidate) in primary.into_iter().enumerate() {
            match by_left.get(&i).and_then(|p| right_slots[p.right].take()) {
                Some(counterpart) => {
                    merged.push(self.select_representative(query, candidate, counterpart))
                }
                None => merged.push(candidate),
            }
        }
        for track in right_slots.into_iter().flatten() {
            merged.push(track);
        }

        log::info!("reconciled {} result(s) for '{}'", merged.len(), query);
        truncated(merged, limit)
    }

    /// Greedily pair candidates across the two lists.
    ///
    /// Walks `left` in order; each candidate claims the first unused
    /// `right` candidate holding the highest similarity, provided that
    /// similarity clears the threshold strictly. Each candidate joins
    /// at most one pair. Greedy rather than a globally optimal
    /// assignment: O(n*m), deterministic, and plenty at search-result
    /// sizes.
    pub fn pair_candidates(&self, left: &[Track], right: &[Track]) -> MatchOutcome {
        let right_keys: Vec<String> = right.iter().map(comparison_key).collect();
        let mut used_right = vec![false; right.len()];
        let mut pairs = Vec::new();
        let mut unmatched_left = Vec::new();

        for (i, candidate) in left.iter().enumerate() {
            let key = comparison_key(candidate);
            let mut best: Option<usize> = None;
            // Strict `>` against the running best: the first candidate
            // at the top score keeps the match.
            let mut best_score = self.threshold;

            for (j, right_key) in right_keys.iter().enumerate() {
                if used_right[j] {
                    continue;
                }
                let score = similarity(&key, right_key);
                if score > best_score {
                    best_score = score;
                    best = Some(j);
                }
            }

            match best {
                Some(j) => {
                    log::debug!(
                        "matched '{}' with '{}' (score {})",
                        key,
                        right_keys[j],
                        best_score
                    );
                    used_right[j] = true;
                    pairs.push(MatchPair {
                        left: i,
                        right: j,
                        score: best_score,
                    });
                }
                None => unmatched_left.push(i),
            }
        }

        let unmatched_right = (0..right.len()).filter(|&j| !used_right[j]).collect();
        MatchOutcome {
            pairs,
            unmatched_left,
            unmatched_right,
        }
    }

    /// Pick the representative for a confirmed pair by similarity to
    /// the user's query. Ties keep the primary-side candidate.
    pub fn select_representative(&self, query: &str, a: Track, b: Track) -> Track {
        let query_key = query.trim().to_lowercase();
        let score_a = similarity(&query_key, &comparison_key(&a));
        let score_b = similarity(&query_key, &comparison_key(&b));
        log::debug!(
            "query '{}': {} scored {}, {} scored {}",
            query_key,
            a.provider,
            score_a,
            b.provider,
            score_b
        );
        if score_a >= score_b {
            a
        } else {
            b
        }
    }
}

fn truncated(mut tracks: Vec<Track>, limit: usize) -> Vec<Track> {
    tracks.truncate(limit);
    tracks
}
