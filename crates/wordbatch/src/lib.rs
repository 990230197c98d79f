//! # `wordbatch` Sequence Classification Data Preparation
//!
//! Builds a word vocabulary from a labeled text corpus, and draws random
//! batches of one-hot encoded sequences from it for training sequence
//! classifiers.
//!
//! See:
//! * [`corpus`] to load a labeled corpus.
//! * [`normalize`] for the shared word tokenizer.
//! * [`vocab`] to build, save, and load word vocabularies.
//! * [`batching`] to vectorize text and sample training batches.
//!
//! ## Sampling Batches
//!
//! ```rust,no_run
//! use wordbatch::{batching::make_batch_source, errors::WBResult};
//!
//! fn example() -> WBResult<()> {
//!     let batches = make_batch_source("tweets.csv", 32, 50, 5000)?;
//!
//!     // The source never ends; the consumer decides how much to pull.
//!     for batch in batches.take(100) {
//!         assert_eq!(batch.inputs.dim(), (32, 50, 5001));
//!         assert_eq!(batch.labels.len(), 32);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod batching;
pub mod corpus;
pub mod counting;
pub mod errors;
pub mod normalize;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use batching::{Batch, BatchSampler, BatchSamplerOptions, SequenceEncoder, make_batch_source};
#[doc(inline)]
pub use corpus::{Corpus, CorpusOptions, Record};
#[doc(inline)]
pub use errors::{WBResult, WordbatchError};
#[doc(inline)]
pub use vocab::{VocabBuilder, VocabBuilderOptions, WordVocab, build_vocabulary};
