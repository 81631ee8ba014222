//! Data types produced while reconciling two result lists.

/// A confirmed cross-provider match: indices into the primary (`left`)
/// and secondary (`right`) result lists, plus the similarity score that
/// confirmed it. Lives only for the duration of one reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPair {
    pub left: usize,
    pub right: usize,
    /// Similarity between the two comparison keys, in 0..=100.
    pub score: u8,
}

/// Everything the matcher decided about one pair of result lists.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub pairs: Vec<MatchPair>,
    /// Primary-list indices that found no counterpart, in list order.
    pub unmatched_left: Vec<usize>,
    /// Secondary-list indices never claimed by a pair, in list order.
    pub unmatched_right: Vec<usize>,
}
