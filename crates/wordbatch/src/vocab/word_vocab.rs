//! # Word Vocabulary

use compact_str::CompactString;

use crate::{
    errors::{WBResult, WordbatchError},
    types::{WBHashMap, hash_map_with_capacity},
};

/// The encoded index reserved for out-of-vocabulary tokens.
pub const UNKNOWN_INDEX: usize = 0;

/// An ordered, immutable word vocabulary.
///
/// Tokens are held in rank order. The token at list position `i`
/// encodes to index `i + 1`; index [`UNKNOWN_INDEX`] is reserved
/// for tokens outside the vocabulary.
///
/// Membership is a hash lookup; the list order only matters for encoding.
#[derive(Debug, Clone)]
pub struct WordVocab {
    tokens: Vec<CompactString>,
    positions: WBHashMap<CompactString, usize>,
}

impl PartialEq for WordVocab {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for WordVocab {}

impl WordVocab {
    /// Build a vocabulary from tokens in rank order.
    ///
    /// ## Errors
    /// Empty or duplicate tokens are data errors.
    pub fn from_tokens<I, S>(tokens: I) -> WBResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<CompactString> = tokens
            .into_iter()
            .map(|t| CompactString::from(t.as_ref()))
            .collect();

        let mut positions = hash_map_with_capacity(tokens.len());
        for (pos, token) in tokens.iter().enumerate() {
            if token.is_empty() {
                return Err(WordbatchError::data(format!(
                    "vocab position {pos}: empty token"
                )));
            }
            if positions.insert(token.clone(), pos).is_some() {
                return Err(WordbatchError::data(format!(
                    "vocab position {pos}: duplicate token {token:?}"
                )));
            }
        }

        Ok(Self { tokens, positions })
    }

    /// The tokens, in rank order.
    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }

    /// Iterate the tokens, in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(CompactString::as_str)
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The one-hot encoding width: `len() + 1`, counting the unknown slot.
    pub fn encoding_dim(&self) -> usize {
        self.tokens.len() + 1
    }

    /// Does the vocabulary contain `token`?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.positions.contains_key(token)
    }

    /// The rank position of `token`, if present.
    pub fn position(
        &self,
        token: &str,
    ) -> Option<usize> {
        self.positions.get(token).copied()
    }

    /// The encoded index of `token`.
    ///
    /// Present tokens encode to `position + 1`;
    /// absent tokens encode to [`UNKNOWN_INDEX`].
    pub fn encode_index(
        &self,
        token: &str,
    ) -> usize {
        self.position(token)
            .map_or(UNKNOWN_INDEX, |pos| pos + 1)
    }

    /// The token for an encoded index.
    ///
    /// Returns `None` for [`UNKNOWN_INDEX`] and out of range indices.
    pub fn decode_index(
        &self,
        index: usize,
    ) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|pos| self.tokens.get(pos))
            .map(CompactString::as_str)
    }
}
