//! # One-Hot Sequence Encoder

use std::sync::Arc;

use ndarray::{Array2, ArrayViewMut2};

use crate::{
    errors::{WBResult, WordbatchError},
    normalize::{normalize_text, words},
    vocab::WordVocab,
};

/// Default maximum sequence length, in tokens.
pub const DEFAULT_MAX_SEQ_LEN: usize = 50;

/// Encodes text as a fixed-length sequence of one-hot vectors.
///
/// Each timestep is a vector of width `vocab.encoding_dim()`:
/// * a vocabulary token at rank `i` sets index `i + 1`;
/// * an unknown token sets index [`crate::vocab::UNKNOWN_INDEX`];
/// * timesteps past the end of the text stay all-zero;
/// * tokens past `max_seq_len` are dropped.
#[derive(Debug, Clone)]
pub struct SequenceEncoder {
    vocab: Arc<WordVocab>,
    max_seq_len: usize,
}

impl SequenceEncoder {
    /// Create a new encoder.
    ///
    /// ## Errors
    /// A zero `max_seq_len`, or an empty vocabulary, is a config error.
    pub fn new(
        vocab: Arc<WordVocab>,
        max_seq_len: usize,
    ) -> WBResult<Self> {
        if max_seq_len == 0 {
            return Err(WordbatchError::config("max_seq_len must be > 0"));
        }
        if vocab.is_empty() {
            return Err(WordbatchError::config("vocabulary is empty"));
        }
        Ok(Self { vocab, max_seq_len })
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Arc<WordVocab> {
        &self.vocab
    }

    /// The sequence length.
    pub fn max_seq_len(&self) -> usize {
        self.max_seq_len
    }

    /// The one-hot width of each timestep.
    pub fn encoding_dim(&self) -> usize {
        self.vocab.encoding_dim()
    }

    /// The encoded indices of a token sequence, truncated to `max_seq_len`.
    pub fn token_indices<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<usize> {
        tokens
            .iter()
            .take(self.max_seq_len)
            .map(|t| self.vocab.encode_index(t.as_ref()))
            .collect()
    }

    /// Normalize text and return its encoded indices, truncated to `max_seq_len`.
    pub fn text_indices(
        &self,
        text: &str,
    ) -> Vec<usize> {
        let normalized = normalize_text(text);
        words(&normalized)
            .take(self.max_seq_len)
            .map(|w| self.vocab.encode_index(w))
            .collect()
    }

    /// Write one-hot rows for `indices` into a zeroed `(max_seq_len, dim)` view.
    ///
    /// ## Panics
    /// Panics if `out` has the wrong shape, or `indices` is longer than `max_seq_len`.
    pub fn fill_indices(
        &self,
        indices: &[usize],
        mut out: ArrayViewMut2<f32>,
    ) {
        assert_eq!(out.dim(), (self.max_seq_len, self.encoding_dim()));
        assert!(indices.len() <= self.max_seq_len);
        for (step, &index) in indices.iter().enumerate() {
            out[[step, index]] = 1.0;
        }
    }

    /// Encode a token sequence as a `(max_seq_len, dim)` one-hot matrix.
    pub fn encode_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Array2<f32> {
        let mut out = Array2::zeros((self.max_seq_len, self.encoding_dim()));
        self.fill_indices(&self.token_indices(tokens), out.view_mut());
        out
    }

    /// Normalize and encode text as a `(max_seq_len, dim)` one-hot matrix.
    pub fn encode_text(
        &self,
        text: &str,
    ) -> Array2<f32> {
        let mut out = Array2::zeros((self.max_seq_len, self.encoding_dim()));
        self.fill_indices(&self.text_indices(text), out.view_mut());
        out
    }
}
