//! # Corpus Records

/// A single labeled corpus entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The class label; `0.0` or `1.0` for binary sentiment corpora.
    pub label: f32,

    /// The raw text field.
    pub text: String,
}

impl Record {
    /// Create a new record.
    pub fn new<S: Into<String>>(
        label: f32,
        text: S,
    ) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }

    /// The text length in characters (unicode scalar values).
    pub fn text_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Is the text no longer than `max_text_chars`?
    pub fn fits(
        &self,
        max_text_chars: usize,
    ) -> bool {
        self.text_chars() <= max_text_chars
    }
}
