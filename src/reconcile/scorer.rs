//! Fuzzy string similarity scoring.
//!
//! Two metrics drive cross-provider track matching: a whole-string
//! [`ratio`] in the classic sequence-diff family, and a windowed
//! [`partial_ratio`] that rewards containment, so a truncated title
//! still scores highly against the full one. [`similarity`] combines
//! them by taking the maximum.
//!
//! Scores are integers in `0..=100`. Either input being empty scores 0.
//! Inputs are compared as Unicode scalar values, not bytes.

use std::collections::HashMap;

/// Whole-string similarity: `100 * 2*M / (len(a) + len(b))`, where `M`
/// is the total length of the matching blocks found by a greedy
/// longest-common-block search. Symmetric in its arguments.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b).round() as u8
}

/// Best [`ratio`] of the shorter string against every equal-length
/// window of the longer one.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return 0;
    }

    let mut best = 0.0f64;
    for start in 0..=(long.len() - short.len()) {
        let window = &long[start..start + short.len()];
        let score = ratio_chars(short, window);
        if score > best {
            best = score;
        }
        if best >= 100.0 {
            break;
        }
    }
    best.round() as u8
}

/// Combined score used by the matcher: the better of [`ratio`] and
/// [`partial_ratio`].
pub fn similarity(a: &str, b: &str) -> u8 {
    ratio(a, b).max(partial_ratio(a, b))
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let matched = matching_total(a, b);
    200.0 * matched as f64 / (a.len() + b.len()) as f64
}

/// Total length of the matching blocks between `a` and `b`: find the
/// longest common block, then repeat on the pieces to its left and
/// right.
fn matching_total(a: &[char], b: &[char]) -> usize {
    // Positions of each char in b, ascending.
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let mut regions = vec![(0usize, a.len(), 0usize, b.len())];
    let mut total = 0;
    while let Some((alo, ahi, blo, bhi)) = regions.pop() {
        let (i, j, size) = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        total += size;
        regions.push((alo, i, blo, j));
        regions.push((i + size, ahi, j + size, bhi));
    }
    total
}

/// Longest run of identical chars within `a[alo..ahi]` / `b[blo..bhi]`.
/// Among equally long runs, the earliest in `a` (then in `b`) wins.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);
    // run_len[j] = length of the run ending at b[j] and the previous a row.
    let mut run_len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut row: HashMap<usize, usize> = HashMap::new();
        if let Some(js) = b2j.get(&a[i]) {
            for &j in js {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let size = if j > blo {
                    run_len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                row.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        run_len = row;
    }
    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(ratio("shape of you", "shape of you"), 100);
        assert_eq!(partial_ratio("shape of you", "shape of you"), 100);
        assert_eq!(similarity("shape of you", "shape of you"), 100);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(ratio("", ""), 0);
        assert_eq!(ratio("something", ""), 0);
        assert_eq!(ratio("", "something"), 0);
        assert_eq!(partial_ratio("", "something"), 0);
        assert_eq!(partial_ratio("", ""), 0);
        assert_eq!(similarity("", ""), 0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("hello world", "hello word"),
            ("shape of you", "shape of you ed sheeran"),
            ("raabta", "kesariya"),
        ];
        for (a, b) in pairs {
            assert_eq!(ratio(a, b), ratio(b, a));
            assert_eq!(partial_ratio(a, b), partial_ratio(b, a));
        }
    }

    #[test]
    fn test_single_edit() {
        // 10 matched chars over 21: round(2000 / 21) = 95
        assert_eq!(ratio("hello world", "hello word"), 95);
    }

    #[test]
    fn test_no_common_chars() {
        assert_eq!(ratio("abc", "xyz"), 0);
        assert_eq!(partial_ratio("abc", "xyz"), 0);
        assert_eq!(similarity("abc", "xyz"), 0);
    }

    #[test]
    fn test_partial_rewards_containment() {
        assert!(ratio("shape of you", "shape of you ed sheeran") < 100);
        assert_eq!(partial_ratio("shape of you", "shape of you ed sheeran"), 100);
        assert_eq!(similarity("shape of you", "shape of you ed sheeran"), 100);
    }

    #[test]
    fn test_partial_mid_string_window() {
        assert_eq!(partial_ratio("of you", "shape of you ed sheeran"), 100);
        assert_eq!(partial_ratio("abcd", "xxabcdxx"), 100);
    }

    #[test]
    fn test_exactly_eighty() {
        // 4 of the 5 chars on each side sit in matching blocks:
        // 100 * 2*4 / 10 = 80 for both metrics.
        assert_eq!(ratio("abcd ", "abcx "), 80);
        assert_eq!(partial_ratio("abcd ", "abcx "), 80);
        assert_eq!(similarity("abcd ", "abcx "), 80);
    }

    #[test]
    fn test_unicode_scalars() {
        assert_eq!(ratio("héllo", "héllo"), 100);
        // 'é' breaks the run: blocks "h" + "llo" over 10 chars
        assert_eq!(ratio("héllo", "hello"), 80);
    }

    #[test]
    fn test_bounded() {
        for (a, b) in [("a", "ab"), ("track", "trak"), ("ed sheeran", "sheeran ed")] {
            assert!(similarity(a, b) <= 100);
        }
    }
}
