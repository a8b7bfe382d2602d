use indexmap::IndexMap;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

/// Tokens shorter than this many characters are never counted.
pub const MIN_WORD_LEN: usize = 3;

/// Word counts ordered by descending count; ties keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: IndexMap<String, usize>,
}

impl FrequencyMap {
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Number of tokens that survived filtering.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.first().map(|(_, &c)| c).unwrap_or(0)
    }

    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        self.iter().take(n).collect()
    }
}

/// Drops short tokens and stop-words, then counts what is left.
pub fn count<I, T, S>(tokens: I, stopwords: &HashSet<S>) -> FrequencyMap
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
    S: Borrow<str> + Hash + Eq,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for token in tokens {
        let token = token.as_ref();
        // Length check comes first and does not depend on the stop-word set
        if token.chars().count() < MIN_WORD_LEN {
            continue;
        }
        if stopwords.contains(token) {
            continue;
        }
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    // sort_by is stable, so equal counts stay in insertion order
    counts.sort_by(|_, a, _, b| b.cmp(a));
    FrequencyMap { counts }
}
