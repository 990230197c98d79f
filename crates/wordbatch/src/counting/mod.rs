//! # Token Counting
//!
//! Frequency counting over normalized word tokens; the ranking
//! primitive behind [`crate::vocab::VocabBuilder`].

mod token_counter;

#[doc(inline)]
pub use token_counter::{
    DEFAULT_COUNTER_CAPACITY,
    SeenAt,
    TokenCount,
    TokenCounter,
    TokenCounterOptions,
};
