//! # Random Batch Sampler

use std::{path::Path, sync::Arc};

use ndarray::Axis;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    batching::{Batch, DEFAULT_MAX_SEQ_LEN, SequenceEncoder},
    corpus::{Corpus, CorpusOptions},
    errors::{WBResult, WordbatchError},
    vocab::{VocabBuilderOptions, WordVocab},
};

/// Options for [`BatchSampler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSamplerOptions {
    /// Slots per batch; must be > 0.
    pub batch_size: usize,

    /// Timesteps per slot; must be > 0.
    pub max_seq_len: usize,

    /// The maximum vocabulary size; must be > 0.
    pub max_vocab_size: usize,

    /// Optional seed for the random source.
    pub seed: Option<u64>,
}

impl BatchSamplerOptions {
    /// Create new options with the default sequence length.
    ///
    /// ## Arguments
    /// * `batch_size` - slots per batch.
    /// * `max_vocab_size` - the maximum vocabulary size.
    pub fn new(
        batch_size: usize,
        max_vocab_size: usize,
    ) -> Self {
        Self {
            batch_size,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            max_vocab_size,
            seed: None,
        }
    }

    /// Sets the batch size.
    pub fn with_batch_size(
        self,
        batch_size: usize,
    ) -> Self {
        Self { batch_size, ..self }
    }

    /// Sets the sequence length.
    pub fn with_max_seq_len(
        self,
        max_seq_len: usize,
    ) -> Self {
        Self {
            max_seq_len,
            ..self
        }
    }

    /// Sets the maximum vocabulary size.
    pub fn with_max_vocab_size(
        self,
        max_vocab_size: usize,
    ) -> Self {
        Self {
            max_vocab_size,
            ..self
        }
    }

    /// Sets the random seed; `None` draws from OS entropy.
    pub fn with_seed(
        self,
        seed: Option<u64>,
    ) -> Self {
        Self { seed, ..self }
    }

    /// Check the sizes are all positive.
    pub fn validate(&self) -> WBResult<()> {
        if self.batch_size == 0 {
            return Err(WordbatchError::config("batch_size must be > 0"));
        }
        if self.max_seq_len == 0 {
            return Err(WordbatchError::config("max_seq_len must be > 0"));
        }
        if self.max_vocab_size == 0 {
            return Err(WordbatchError::config("max_vocab_size must be > 0"));
        }
        Ok(())
    }

    fn init_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

/// Sampling counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplerStats {
    /// Batches produced.
    pub batches: u64,

    /// Records drawn, including re-draws.
    pub records_drawn: u64,

    /// Draws discarded because the record was over-length.
    pub redraws: u64,
}

/// An endless source of random training batches.
///
/// Each slot of each batch is an independent uniform draw, with replacement,
/// from the whole corpus; over-length records are re-drawn until an eligible
/// record fills the slot. The iterator never returns `None`; consumers
/// bound it with [`Iterator::take`] or similar.
///
/// The corpus and vocabulary are shared read-only; see [`Self::fork`].
#[derive(Debug, Clone)]
pub struct BatchSampler<R: Rng = StdRng> {
    options: BatchSamplerOptions,
    corpus: Arc<Corpus>,
    encoder: SequenceEncoder,
    rng: R,
    stats: SamplerStats,
}

impl BatchSampler<StdRng> {
    /// Create a sampler over a corpus and a prebuilt vocabulary.
    ///
    /// Seeds from `options.seed` when set.
    pub fn new(
        corpus: Arc<Corpus>,
        vocab: Arc<WordVocab>,
        options: BatchSamplerOptions,
    ) -> WBResult<Self> {
        let rng = options.init_rng();
        Self::with_rng(corpus, vocab, options, rng)
    }

    /// Build the vocabulary for a corpus, and create a sampler over it.
    pub fn from_corpus(
        corpus: Arc<Corpus>,
        options: BatchSamplerOptions,
    ) -> WBResult<Self> {
        options.validate()?;
        let vocab = VocabBuilderOptions::new(options.max_vocab_size)
            .init()?
            .build(&corpus)?;
        Self::new(corpus, Arc::new(vocab), options)
    }
}

impl<R: Rng> BatchSampler<R> {
    /// Create a sampler driven by the given random source.
    ///
    /// ## Errors
    /// * config error: a zero size, an empty vocabulary, or a vocabulary
    ///   larger than `max_vocab_size`.
    /// * data error: a corpus with no eligible records.
    pub fn with_rng(
        corpus: Arc<Corpus>,
        vocab: Arc<WordVocab>,
        options: BatchSamplerOptions,
        rng: R,
    ) -> WBResult<Self> {
        options.validate()?;
        if vocab.len() > options.max_vocab_size {
            return Err(WordbatchError::config(format!(
                "vocabulary has {} tokens, more than max_vocab_size {}",
                vocab.len(),
                options.max_vocab_size
            )));
        }
        if corpus.eligible_count() == 0 {
            return Err(WordbatchError::data(format!(
                "corpus has no records within {} chars",
                corpus.max_text_chars()
            )));
        }

        let encoder = SequenceEncoder::new(vocab, options.max_seq_len)?;

        Ok(Self {
            options,
            corpus,
            encoder,
            rng,
            stats: SamplerStats::default(),
        })
    }

    /// The sampler options.
    pub fn options(&self) -> &BatchSamplerOptions {
        &self.options
    }

    /// The shared corpus.
    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    /// The shared vocabulary.
    pub fn vocab(&self) -> &Arc<WordVocab> {
        self.encoder.vocab()
    }

    /// The sequence encoder.
    pub fn encoder(&self) -> &SequenceEncoder {
        &self.encoder
    }

    /// The sampling counters so far.
    pub fn stats(&self) -> SamplerStats {
        self.stats
    }

    /// An independent sampler over the same corpus and vocabulary.
    ///
    /// The fork has its own seeded random source and fresh counters;
    /// it may be moved to another thread.
    pub fn fork(
        &self,
        seed: u64,
    ) -> BatchSampler<StdRng> {
        BatchSampler {
            options: self.options.clone().with_seed(Some(seed)),
            corpus: self.corpus.clone(),
            encoder: self.encoder.clone(),
            rng: StdRng::seed_from_u64(seed),
            stats: SamplerStats::default(),
        }
    }

    /// Draw the index of an eligible record.
    ///
    /// Uniform with replacement over the whole corpus; over-length
    /// records are discarded and re-drawn.
    pub fn draw_index(&mut self) -> usize {
        let records = self.corpus.records();
        loop {
            let idx = self.rng.random_range(0..records.len());
            self.stats.records_drawn += 1;
            if self.corpus.is_eligible(&records[idx]) {
                return idx;
            }
            self.stats.redraws += 1;
            log::trace!("re-drawing over-length record {idx}");
        }
    }

    /// Draw and encode a full batch.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn next_batch(&mut self) -> Batch {
        let mut batch = Batch::zeros(
            self.options.batch_size,
            self.options.max_seq_len,
            self.encoder.encoding_dim(),
        );

        for slot in 0..self.options.batch_size {
            let idx = self.draw_index();
            let record = &self.corpus.records()[idx];

            batch.labels[slot] = record.label;
            let indices = self.encoder.text_indices(&record.text);
            self.encoder
                .fill_indices(&indices, batch.inputs.index_axis_mut(Axis(0), slot));
        }

        self.stats.batches += 1;
        batch
    }
}

impl<R: Rng> Iterator for BatchSampler<R> {
    type Item = Batch;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_batch())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Open an endless batch source over a corpus file.
///
/// Loads the corpus once (default [`CorpusOptions`]), builds its vocabulary
/// of at most `max_vocab_size` tokens, and samples batches of
/// `[batch_size, max_seq_len, vocab_len + 1]` inputs with `[batch_size]` labels.
///
/// ## Errors
/// Zero sizes are config errors, reported before the corpus is read.
pub fn make_batch_source<P: AsRef<Path>>(
    corpus_path: P,
    batch_size: usize,
    max_seq_len: usize,
    max_vocab_size: usize,
) -> WBResult<BatchSampler> {
    let options = BatchSamplerOptions::new(batch_size, max_vocab_size).with_max_seq_len(max_seq_len);
    options.validate()?;

    let corpus = Corpus::load_path(corpus_path, CorpusOptions::default())?;
    BatchSampler::from_corpus(Arc::new(corpus), options)
}
