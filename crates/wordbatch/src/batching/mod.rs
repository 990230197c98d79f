//! # Batch Vectorization and Sampling
//!
//! * [`SequenceEncoder`] turns one text into a ``[max_seq_len, vocab_len + 1]``
//!   one-hot matrix.
//! * [`BatchSampler`] is an endless iterator of random [`Batch`]es.
//!
//! Sampling is pull-based and synchronous: each `next()` fully builds
//! one batch before returning. For multiple workers, give each its own
//! [`BatchSampler::fork`]; forks share the corpus and vocabulary.

mod batch;
mod batch_sampler;
mod sequence_encoder;

#[doc(inline)]
pub use batch::Batch;
#[doc(inline)]
pub use batch_sampler::{BatchSampler, BatchSamplerOptions, SamplerStats, make_batch_source};
#[doc(inline)]
pub use sequence_encoder::{DEFAULT_MAX_SEQ_LEN, SequenceEncoder};
