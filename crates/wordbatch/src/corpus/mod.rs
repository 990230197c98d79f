//! # Labeled Corpora
//!
//! A corpus is a delimited text file, one record per row,
//! with a numeric label column and a text column.
//!
//! The default layout matches the common tweet sentiment dump:
//! ```terminaloutput
//! {ITEM ID},{LABEL},{SOURCE},"{TEXT}"
//! ```
//!
//! Records whose text is longer than [`CorpusOptions::max_text_chars`]
//! are kept in memory, but are ineligible for vocabulary counting
//! and batch sampling.

mod corpus_options;
mod labeled_corpus;
mod record;

#[doc(inline)]
pub use corpus_options::{
    CorpusOptions,
    DEFAULT_LABEL_COLUMN,
    DEFAULT_MAX_TEXT_CHARS,
    DEFAULT_TEXT_COLUMN,
};
#[doc(inline)]
pub use labeled_corpus::Corpus;
#[doc(inline)]
pub use record::Record;
