//! # Vocabulary Builder

use std::path::Path;

use compact_str::CompactString;

use crate::{
    corpus::{Corpus, CorpusOptions},
    counting::{TokenCounter, TokenCounterOptions},
    errors::{WBResult, WordbatchError},
    vocab::WordVocab,
};

/// Options for [`VocabBuilder`].
#[derive(Debug, Clone)]
pub struct VocabBuilderOptions {
    /// The maximum vocabulary size; must be > 0.
    pub max_size: usize,

    /// Options for the underlying token counter.
    pub counter: TokenCounterOptions,
}

impl VocabBuilderOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `max_size` - The maximum vocabulary size.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            counter: TokenCounterOptions::default(),
        }
    }

    /// Sets the maximum vocabulary size.
    pub fn with_max_size(
        self,
        max_size: usize,
    ) -> Self {
        Self { max_size, ..self }
    }

    /// Sets the token counter options.
    pub fn with_counter(
        self,
        counter: TokenCounterOptions,
    ) -> Self {
        Self { counter, ..self }
    }

    /// Initializes a [`VocabBuilder`] from these options.
    ///
    /// ## Errors
    /// A zero `max_size` is a config error.
    pub fn init(self) -> WBResult<VocabBuilder> {
        VocabBuilder::new(self)
    }
}

/// Builds a [`WordVocab`] of the most frequent tokens in a corpus.
///
/// Only eligible records (see [`Corpus::is_eligible`]) are counted.
/// Tokens are ranked by descending count, ties broken by the order
/// in which they were first encountered.
#[derive(Debug, Clone)]
pub struct VocabBuilder {
    options: VocabBuilderOptions,
}

impl VocabBuilder {
    /// Create a new builder.
    ///
    /// ## Errors
    /// A zero `max_size` is a config error.
    pub fn new(options: VocabBuilderOptions) -> WBResult<Self> {
        if options.max_size == 0 {
            return Err(WordbatchError::config("vocabulary max_size must be > 0"));
        }
        Ok(Self { options })
    }

    /// The builder options.
    pub fn options(&self) -> &VocabBuilderOptions {
        &self.options
    }

    /// Count the eligible records of a corpus.
    ///
    /// ## Errors
    /// An empty corpus, or one with no eligible records, is a data error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, corpus)))]
    pub fn count(
        &self,
        corpus: &Corpus,
    ) -> WBResult<TokenCounter<CompactString, u64>> {
        if corpus.is_empty() {
            return Err(WordbatchError::data("corpus is empty"));
        }

        let mut counter = TokenCounter::new(self.options.counter.clone());

        #[cfg(feature = "rayon")]
        {
            let texts: Vec<&str> = corpus
                .eligible_records()
                .map(|r| r.text.as_str())
                .collect();
            counter.update_from_samples_par(&texts);
        }
        #[cfg(not(feature = "rayon"))]
        counter.update_from_samples(corpus.eligible_records().map(|r| r.text.as_str()));

        if counter.samples_seen() == 0 {
            return Err(WordbatchError::data(format!(
                "corpus has no records within {} chars",
                corpus.max_text_chars()
            )));
        }

        log::debug!(
            "counted {} distinct tokens over {} eligible records",
            counter.len(),
            counter.samples_seen()
        );
        Ok(counter)
    }

    /// Build the vocabulary for a corpus.
    ///
    /// ## Returns
    /// The `min(max_size, distinct tokens)` highest ranked tokens.
    ///
    /// ## Errors
    /// An empty corpus, no eligible records, or no tokens in the
    /// eligible records are data errors.
    pub fn build(
        &self,
        corpus: &Corpus,
    ) -> WBResult<WordVocab> {
        let counter = self.count(corpus)?;
        if counter.is_empty() {
            return Err(WordbatchError::data("eligible records contain no tokens"));
        }

        let top = counter.top_k(self.options.max_size);
        let vocab = WordVocab::from_tokens(top.iter().map(|(token, _)| token))?;

        log::info!(
            "vocabulary: {} tokens (max {}, {} distinct)",
            vocab.len(),
            self.options.max_size,
            counter.len()
        );
        Ok(vocab)
    }
}

/// Build a vocabulary of the `max_size` most frequent tokens of a corpus file.
///
/// Uses the default [`CorpusOptions`] layout and eligibility cap.
///
/// ## Arguments
/// * `corpus_path` - path to the corpus file.
/// * `max_size` - the maximum vocabulary size; must be > 0.
pub fn build_vocabulary<P: AsRef<Path>>(
    corpus_path: P,
    max_size: usize,
) -> WBResult<WordVocab> {
    let builder = VocabBuilderOptions::new(max_size).init()?;
    let corpus = Corpus::load_path(corpus_path, CorpusOptions::default())?;
    builder.build(&corpus)
}
