//! # Token Counter

use core::cmp::Ordering;

use crate::{
    normalize::{normalize_text, words},
    types::{CountType, WBHashMap, WordType, hash_map_with_capacity},
};

/// Default initial capacity of the count table.
pub const DEFAULT_COUNTER_CAPACITY: usize = 16_384;

/// Where a token was first seen: ``(sample index, word position)``.
pub type SeenAt = (usize, usize);

/// Count and first sighting of one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCount<C: CountType> {
    /// The number of occurrences.
    pub count: C,

    /// The first sighting.
    pub first_seen: SeenAt,
}

impl<C: CountType> TokenCount<C> {
    /// Ranking order: descending count, then earliest first sighting.
    pub fn rank_cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.first_seen.cmp(&other.first_seen))
    }

    fn absorb(
        &mut self,
        other: &Self,
    ) {
        self.count += other.count;
        self.first_seen = self.first_seen.min(other.first_seen);
    }
}

/// Options for [`TokenCounter`].
#[derive(Debug, Clone)]
pub struct TokenCounterOptions {
    /// Initial capacity of the count table.
    pub capacity: usize,
}

impl Default for TokenCounterOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_COUNTER_CAPACITY,
        }
    }
}

impl TokenCounterOptions {
    /// Set the initial capacity of the count table.
    pub fn with_capacity(
        self,
        capacity: usize,
    ) -> Self {
        Self { capacity }
    }
}

/// Frequency counter over normalized word tokens.
///
/// Remembers where each token was first seen, so ranking ties
/// resolve to first-encountered order.
///
/// # Parameters
/// * `K` - the type used to store words.
/// * `C` - the type used to store counts.
#[derive(Debug, Clone)]
pub struct TokenCounter<K, C>
where
    K: WordType,
    C: CountType,
{
    /// The config options.
    pub options: TokenCounterOptions,

    counts: WBHashMap<K, TokenCount<C>>,
    samples_seen: usize,
}

impl<K, C> Default for TokenCounter<K, C>
where
    K: WordType,
    C: CountType,
{
    fn default() -> Self {
        Self::new(TokenCounterOptions::default())
    }
}

impl<K, C> TokenCounter<K, C>
where
    K: WordType,
    C: CountType,
{
    /// Create a new counter.
    pub fn new(options: TokenCounterOptions) -> Self {
        let counts = hash_map_with_capacity(options.capacity);
        Self {
            options,
            counts,
            samples_seen: 0,
        }
    }

    /// The number of samples counted so far.
    pub fn samples_seen(&self) -> usize {
        self.samples_seen
    }

    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Have no tokens been counted?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Look up the count record of a token.
    pub fn get(
        &self,
        token: &str,
    ) -> Option<&TokenCount<C>>
    where
        K: core::borrow::Borrow<str>,
    {
        self.counts.get(token)
    }

    /// Update counts inplace from one text sample.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let sample_idx = self.samples_seen;
        self.count_sample(sample_idx, text.as_ref());
        self.samples_seen += 1;
    }

    /// Update counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Update counts inplace from a slice of samples, in parallel.
    ///
    /// Produces the same counts and first sightings as
    /// [`Self::update_from_samples`].
    #[cfg(feature = "rayon")]
    pub fn update_from_samples_par<S>(
        &mut self,
        samples: &[S],
    ) where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let base = self.samples_seen;
        let options = self.options.clone();

        let partial = samples
            .par_iter()
            .enumerate()
            .fold(
                || Self::new(options.clone().with_capacity(1024)),
                |mut acc, (idx, sample)| {
                    acc.count_sample(base + idx, sample.as_ref());
                    acc
                },
            )
            .reduce(
                || Self::new(options.clone().with_capacity(0)),
                |mut a, b| {
                    a.absorb_counts(b.counts);
                    a
                },
            );

        self.absorb_counts(partial.counts);
        self.samples_seen = base + samples.len();
    }

    /// Append another counter's samples after this counter's samples.
    ///
    /// Counts add. The other counter's sample indices are shifted past
    /// [`Self::samples_seen`], so the result ranks exactly as if both
    /// sample streams had been counted, in order, by this counter.
    pub fn merge(
        &mut self,
        other: Self,
    ) {
        let offset = self.samples_seen;
        let shifted = other.counts.into_iter().map(|(token, mut tc)| {
            tc.first_seen.0 += offset;
            (token, tc)
        });
        self.absorb_counts(shifted);
        self.samples_seen += other.samples_seen;
    }

    /// All tokens with their counts, in rank order.
    ///
    /// Ties on count and first sighting fall back to token order.
    pub fn ranked(&self) -> Vec<(K, C)> {
        let mut items: Vec<(&K, &TokenCount<C>)> = self.counts.iter().collect();
        items.sort_by(|a, b| a.1.rank_cmp(b.1).then_with(|| a.0.cmp(b.0)));
        items
            .into_iter()
            .map(|(k, tc)| (k.clone(), tc.count))
            .collect()
    }

    /// The `k` highest ranked tokens with their counts.
    ///
    /// Returns all tokens when fewer than `k` are known.
    pub fn top_k(
        &self,
        k: usize,
    ) -> Vec<(K, C)> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }

    /// Fold counts in, keeping sample indices as they are.
    fn absorb_counts<I>(
        &mut self,
        counts: I,
    ) where
        I: IntoIterator<Item = (K, TokenCount<C>)>,
    {
        for (token, tc) in counts {
            self.counts
                .entry(token)
                .and_modify(|e| e.absorb(&tc))
                .or_insert(tc);
        }
    }

    fn count_sample(
        &mut self,
        sample_idx: usize,
        text: &str,
    ) {
        let normalized = normalize_text(text);
        for (pos, word) in words(&normalized).enumerate() {
            let entry = self.counts.entry(K::from(word)).or_insert(TokenCount {
                count: C::zero(),
                first_seen: (sample_idx, pos),
            });
            entry.count += C::one();
        }
    }
}

#[cfg(test)]
mod tests {
    use compact_str::CompactString;

    use super::*;

    fn words_of<K: WordType, C: CountType>(ranked: &[(K, C)]) -> Vec<&str> {
        ranked.iter().map(|(k, _)| k.as_ref()).collect()
    }

    #[test]
    fn test_counts_and_rank_order() {
        let mut counter: TokenCounter<String, u32> = Default::default();
        counter.update_from_samples(["i love it", "i hate it", "i love cats"]);

        assert_eq!(counter.samples_seen(), 3);
        assert_eq!(counter.len(), 5);
        assert_eq!(
            counter.ranked(),
            vec![
                ("i".to_string(), 3),
                ("love".to_string(), 2),
                ("it".to_string(), 2),
                ("hate".to_string(), 1),
                ("cats".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_first_seen_within_sample() {
        let mut counter: TokenCounter<CompactString, u64> = Default::default();
        counter.update_from_text("b a");
        counter.update_from_text("a b");

        assert_eq!(counter.get("b").unwrap().first_seen, (0, 0));
        assert_eq!(counter.get("a").unwrap().first_seen, (0, 1));
        assert_eq!(words_of(&counter.ranked()), vec!["b", "a"]);
    }

    #[test]
    fn test_top_k() {
        let mut counter: TokenCounter<String, u32> = Default::default();
        counter.update_from_samples(["x y y z z z"]);

        assert_eq!(words_of(&counter.top_k(2)), vec!["z", "y"]);
        assert_eq!(words_of(&counter.top_k(10)), vec!["z", "y", "x"]);
        assert!(counter.top_k(0).is_empty());
    }

    #[test]
    fn test_merge_appends_samples() {
        let mut a: TokenCounter<String, u32> = Default::default();
        a.update_from_samples(["one two"]);

        let mut b: TokenCounter<String, u32> = Default::default();
        b.update_from_samples(["two three", "three"]);

        a.merge(b);
        assert_eq!(a.samples_seen(), 3);
        assert_eq!(a.get("two").unwrap().count, 2);
        assert_eq!(a.get("two").unwrap().first_seen, (0, 1));
        assert_eq!(a.get("three").unwrap().count, 2);
        assert_eq!(a.get("three").unwrap().first_seen, (1, 1));
    }

    #[test]
    fn test_merge_ranks_like_sequential() {
        let mut seq: TokenCounter<CompactString, u32> = Default::default();
        seq.update_from_samples(["z x", "x z"]);
        assert_eq!(words_of(&seq.ranked()), vec!["z", "x"]);

        for _ in 0..16 {
            let mut a: TokenCounter<CompactString, u32> = Default::default();
            a.update_from_samples(["z x"]);
            let mut b: TokenCounter<CompactString, u32> = Default::default();
            b.update_from_samples(["x z"]);

            a.merge(b);
            assert_eq!(a.ranked(), seq.ranked());
            assert_eq!(a.samples_seen(), seq.samples_seen());
        }
    }

    #[test]
    fn test_ranked_is_total_on_full_ties() {
        let mut a: TokenCounter<String, u32> = Default::default();
        a.absorb_counts([
            ("b".to_string(), TokenCount { count: 1, first_seen: (0, 0) }),
            ("a".to_string(), TokenCount { count: 1, first_seen: (0, 0) }),
        ]);
        assert_eq!(words_of(&a.ranked()), vec!["a", "b"]);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_matches_sequential() {
        let samples: Vec<String> = (0..500)
            .map(|i| format!("w{} w{} shared w{}", i % 7, i % 13, i % 3))
            .collect();

        let mut seq: TokenCounter<String, u32> = Default::default();
        seq.update_from_samples(samples.iter());

        let mut par: TokenCounter<String, u32> = Default::default();
        par.update_from_samples_par(&samples);

        assert_eq!(par.samples_seen(), seq.samples_seen());
        assert_eq!(par.ranked(), seq.ranked());
    }
}
