#![allow(missing_docs)]

use std::sync::Arc;

use proptest::prelude::*;
use wordbatch::{
    batching::{BatchSampler, BatchSamplerOptions, SequenceEncoder},
    corpus::{Corpus, CorpusOptions, Record},
    normalize::tokenize,
    types::WBHashMap,
    vocab::{UNKNOWN_INDEX, VocabBuilderOptions, WordVocab},
};

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "alpha", "beta", "gamma", "delta", "eps", "zeta", "eta", "theta",
    ])
    .prop_map(str::to_string)
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..12).prop_map(|ws| ws.join(" "))
}

fn records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (prop::bool::ANY, text()).prop_map(|(pos, t)| Record::new(if pos { 1.0 } else { 0.0 }, t)),
        1..20,
    )
}

fn eligible_counts(corpus: &Corpus) -> WBHashMap<String, usize> {
    let mut counts = WBHashMap::default();
    for record in corpus.eligible_records() {
        for token in tokenize(&record.text) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

proptest! {
    #[test]
    fn vocab_is_bounded_distinct_and_ranked(
        records in records(),
        max_size in 1usize..10,
    ) {
        let corpus = Corpus::from_records(records, CorpusOptions::default());
        let counts = eligible_counts(&corpus);
        prop_assume!(!counts.is_empty());

        let builder = VocabBuilderOptions::new(max_size).init().unwrap();
        let vocab = builder.build(&corpus).unwrap();

        prop_assert_eq!(vocab.len(), max_size.min(counts.len()));

        let freqs: Vec<usize> = vocab
            .iter()
            .map(|t| counts.get(t).copied().unwrap_or(0))
            .collect();
        prop_assert!(freqs.windows(2).all(|w| w[0] >= w[1]), "{:?}", freqs);

        // Nothing left out ranks above the last kept token.
        if let Some(&last) = freqs.last() {
            for (token, &count) in counts.iter() {
                if !vocab.contains(token) {
                    prop_assert!(count <= last);
                }
            }
        }

        prop_assert_eq!(builder.build(&corpus).unwrap(), vocab);
    }

    #[test]
    fn encoded_steps_are_one_hot_or_padding(
        tokens in prop::collection::vec(word(), 0..20),
        vocab_words in prop::collection::hash_set(word(), 1..5),
        max_seq_len in 1usize..15,
    ) {
        let vocab = Arc::new(WordVocab::from_tokens(vocab_words.iter()).unwrap());
        let encoder = SequenceEncoder::new(vocab.clone(), max_seq_len).unwrap();
        let encoded = encoder.encode_tokens(&tokens);

        prop_assert_eq!(encoded.dim(), (max_seq_len, vocab.len() + 1));
        for (step, row) in encoded.outer_iter().enumerate() {
            let active: Vec<usize> = row
                .iter()
                .enumerate()
                .filter(|(_, v)| **v != 0.0)
                .map(|(i, _)| i)
                .collect();

            match tokens.get(step) {
                Some(token) => {
                    let expected = vocab.position(token).map_or(UNKNOWN_INDEX, |p| p + 1);
                    prop_assert_eq!(active, vec![expected]);
                    if !vocab.contains(token) {
                        prop_assert_eq!(expected, UNKNOWN_INDEX);
                    }
                }
                None => prop_assert!(active.is_empty()),
            }
        }
    }

    #[test]
    fn batch_labels_come_from_the_corpus(
        records in records(),
        batch_size in 1usize..16,
        seed in any::<u64>(),
    ) {
        let corpus = Corpus::from_records(records, CorpusOptions::default());
        prop_assume!(!eligible_counts(&corpus).is_empty());

        let labels: Vec<f32> = corpus.records().iter().map(|r| r.label).collect();
        let options = BatchSamplerOptions::new(batch_size, 8)
            .with_max_seq_len(6)
            .with_seed(Some(seed));
        let mut sampler = BatchSampler::from_corpus(Arc::new(corpus), options).unwrap();

        for batch in sampler.by_ref().take(3) {
            prop_assert_eq!(batch.labels.len(), batch_size);
            prop_assert!(batch.labels.iter().all(|l| labels.contains(l)));
            for slot in 0..batch_size {
                let active = batch.active_indices(slot);
                let len = batch.sequence_len(slot);
                prop_assert!(active[..len].iter().all(Option::is_some));
                prop_assert!(active[len..].iter().all(Option::is_none));
            }
        }
    }
}
