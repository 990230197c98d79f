//! # Vocabulary
//!
//! This module provides the word vocabulary, the frequency-ranked
//! vocabulary builder, and vocab io.
//!
//! ## Building A Vocab
//!
//! ```rust,no_run
//! use wordbatch::{
//!     corpus::{Corpus, CorpusOptions},
//!     errors::WBResult,
//!     vocab::{VocabBuilderOptions, WordVocab, io::save_vocab_path},
//! };
//!
//! fn example() -> WBResult<WordVocab> {
//!     let corpus = Corpus::load_path("tweets.csv", CorpusOptions::default())?;
//!     let vocab = VocabBuilderOptions::new(5000).init()?.build(&corpus)?;
//!     save_vocab_path(&vocab, "vocab.txt")?;
//!     Ok(vocab)
//! }
//! ```

pub mod io;

mod vocab_builder;
mod word_vocab;

#[doc(inline)]
pub use vocab_builder::{VocabBuilder, VocabBuilderOptions, build_vocabulary};
#[doc(inline)]
pub use word_vocab::{UNKNOWN_INDEX, WordVocab};
