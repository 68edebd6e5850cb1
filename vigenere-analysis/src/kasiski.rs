//! Kasiski examination
//!
//! Identical plaintext polygrams encrypted at the same key alignment produce
//! identical ciphertext polygrams, so the distance between two repeats is
//! likely a multiple of the key length. The GCDs of many such distances
//! vote for the key length.
//!
//! ```text
//! plain:      .....DES...........DES.......DES.........DES....DES.....
//! key:        ABCDABCDABCDABCDABCDABCDABCDABCDABCDABCDABCDABCDABCDABCD
//! cipher:     .....EGV.....................EGV.........EGV............
//! distance:        <--------- 24 --------> <--- 12 -->
//! ```
//!
//! `gcd(24, 12) = 4`, so the key is probably 4 letters long.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::estimator::KeyLengthEstimator;
use crate::text::Ciphertext;

/// Shortest polygram considered a meaningful repeat.
pub const DEFAULT_MIN_REPEAT_LEN: usize = 3;

/// A substring occurring at two or more positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repetition {
    pub pattern: String,
    pub positions: BTreeSet<usize>,
}

impl Repetition {
    /// Distances from the first occurrence to every later one.
    pub fn distances(&self) -> impl Iterator<Item = usize> + '_ {
        let first = self.positions.first().copied().unwrap_or(0);
        self.positions.iter().skip(1).map(move |p| p - first)
    }
}

/// Repeated substrings of a text, ordered by first occurrence then length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionMap {
    repetitions: Vec<Repetition>,
}

impl RepetitionMap {
    pub fn get(&self, pattern: &str) -> Option<&BTreeSet<usize>> {
        self.repetitions
            .iter()
            .find(|r| r.pattern == pattern)
            .map(|r| &r.positions)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Repetition> {
        self.repetitions.iter()
    }

    pub fn len(&self) -> usize {
        self.repetitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repetitions.is_empty()
    }

    /// All first-to-later distances, in map order.
    pub fn distances(&self) -> Vec<usize> {
        self.repetitions.iter().flat_map(Repetition::distances).collect()
    }
}

/// Finds every substring of at least `min_len` letters that occurs twice or
/// more, overlapping occurrences included.
///
/// A repeat whose occurrences are all preceded by the same letter, or all
/// followed by the same letter, is part of a longer repeat and is folded
/// into it.
pub fn repetitions(text: &str, min_len: usize) -> RepetitionMap {
    let bytes = text.as_bytes();
    let mut found = Vec::new();

    if min_len == 0 || bytes.len() < min_len {
        return RepetitionMap::default();
    }

    let mut seeds: BTreeMap<&[u8], Vec<usize>> = BTreeMap::new();
    for (p, window) in bytes.windows(min_len).enumerate() {
        seeds.entry(window).or_default().push(p);
    }

    let mut frontier: Vec<Vec<usize>> = seeds.into_values().filter(|g| g.len() >= 2).collect();
    let mut len = min_len;

    while !frontier.is_empty() {
        let mut next = Vec::new();

        for positions in frontier {
            let mut extended: BTreeMap<u8, Vec<usize>> = BTreeMap::new();
            for &p in &positions {
                if p + len < bytes.len() {
                    extended.entry(bytes[p + len]).or_default().push(p);
                }
            }

            let right_closed = extended.values().any(|g| g.len() == positions.len());
            let left_closed = match positions[0].checked_sub(1) {
                Some(q) => positions.iter().all(|&p| p > 0 && bytes[p - 1] == bytes[q]),
                None => false,
            };

            if !right_closed && !left_closed {
                let start = positions[0];
                found.push(Repetition {
                    pattern: String::from_utf8_lossy(&bytes[start..start + len]).into_owned(),
                    positions: positions.iter().copied().collect(),
                });
            }

            next.extend(extended.into_values().filter(|g| g.len() >= 2));
        }

        frontier = next;
        len += 1;
    }

    found.sort_by_key(|r| (r.positions.first().copied(), r.pattern.len()));

    RepetitionMap { repetitions: found }
}

/// Pairwise GCD votes over `distances`, in order of first appearance.
///
/// Every unordered pair of entries casts one vote for its GCD; GCD 1 carries
/// no information and is not counted.
pub fn gcd_votes(distances: &[usize]) -> Vec<(usize, usize)> {
    let mut votes: Vec<(usize, usize)> = Vec::new();
    let mut index: HashMap<usize, usize> = HashMap::new();

    for (i, &a) in distances.iter().enumerate() {
        for &b in &distances[i + 1..] {
            let divisor = num_integer::gcd(a, b);
            if divisor <= 1 {
                continue;
            }

            let slot = *index.entry(divisor).or_insert_with(|| {
                votes.push((divisor, 0));
                votes.len() - 1
            });
            votes[slot].1 += 1;
        }
    }

    votes
}

/// Votes ranked from most to least popular, ties kept in scan order.
pub fn ranked_votes(text: &str, min_len: usize) -> Vec<(usize, usize)> {
    let mut votes = gcd_votes(&repetitions(text, min_len).distances());
    votes.sort_by(|a, b| b.1.cmp(&a.1));
    votes
}

/// Estimate the key length of `text` by Kasiski examination.
pub fn find_key_length(text: &str, min_len: usize) -> Result<usize> {
    let map = repetitions(text, min_len);
    let distances = map.distances();
    let votes = gcd_votes(&distances);

    debug!(
        repeats = map.len(),
        distances = distances.len(),
        candidates = votes.len(),
        "kasiski scan"
    );

    let mut best: Option<(usize, usize)> = None;
    for &(divisor, count) in &votes {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((divisor, count));
        }
    }

    best.map(|(divisor, _)| divisor)
        .ok_or(AnalysisError::KeyLengthUndetermined)
}

/// Key-length estimator backed by Kasiski examination.
#[derive(Debug, Clone, Copy)]
pub struct Kasiski {
    pub min_repeat_len: usize,
}

impl Default for Kasiski {
    fn default() -> Self {
        Self {
            min_repeat_len: DEFAULT_MIN_REPEAT_LEN,
        }
    }
}

impl KeyLengthEstimator for Kasiski {
    fn name(&self) -> &'static str {
        "kasiski"
    }

    fn estimate(&self, ciphertext: &Ciphertext) -> Result<usize> {
        find_key_length(ciphertext.as_str(), self.min_repeat_len)
    }
}
