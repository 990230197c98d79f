//! # Corpus Options

/// Default maximum text length, in characters, of an eligible record.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 140;

/// Default zero-indexed column of the label field.
pub const DEFAULT_LABEL_COLUMN: usize = 1;

/// Default zero-indexed column of the text field.
pub const DEFAULT_TEXT_COLUMN: usize = 3;

/// Options for loading a [`Corpus`](super::Corpus).
///
/// `max_text_chars` travels with the corpus, so the vocabulary builder
/// and the batch sampler always apply the same eligibility cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusOptions {
    /// Zero-indexed column of the label field.
    pub label_column: usize,

    /// Zero-indexed column of the text field.
    pub text_column: usize,

    /// Field delimiter.
    pub delimiter: u8,

    /// Does the first row hold column names?
    pub has_headers: bool,

    /// Records with longer text are ineligible.
    pub max_text_chars: usize,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            label_column: DEFAULT_LABEL_COLUMN,
            text_column: DEFAULT_TEXT_COLUMN,
            delimiter: b',',
            has_headers: false,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

impl CorpusOptions {
    /// Set the label column.
    pub fn with_label_column(
        self,
        label_column: usize,
    ) -> Self {
        Self {
            label_column,
            ..self
        }
    }

    /// Set the text column.
    pub fn with_text_column(
        self,
        text_column: usize,
    ) -> Self {
        Self {
            text_column,
            ..self
        }
    }

    /// Set the field delimiter.
    pub fn with_delimiter(
        self,
        delimiter: u8,
    ) -> Self {
        Self { delimiter, ..self }
    }

    /// Set whether the first row is a header row.
    pub fn with_has_headers(
        self,
        has_headers: bool,
    ) -> Self {
        Self {
            has_headers,
            ..self
        }
    }

    /// Set the eligibility cap on text length.
    pub fn with_max_text_chars(
        self,
        max_text_chars: usize,
    ) -> Self {
        Self {
            max_text_chars,
            ..self
        }
    }

    /// The number of columns a row must have.
    pub fn min_columns(&self) -> usize {
        self.label_column.max(self.text_column) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CorpusOptions::default();
        assert_eq!(options.label_column, 1);
        assert_eq!(options.text_column, 3);
        assert_eq!(options.delimiter, b',');
        assert!(!options.has_headers);
        assert_eq!(options.max_text_chars, 140);
        assert_eq!(options.min_columns(), 4);
    }

    #[test]
    fn test_builders() {
        let options = CorpusOptions::default()
            .with_label_column(0)
            .with_text_column(1)
            .with_delimiter(b'\t')
            .with_has_headers(true)
            .with_max_text_chars(280);

        assert_eq!(
            options,
            CorpusOptions {
                label_column: 0,
                text_column: 1,
                delimiter: b'\t',
                has_headers: true,
                max_text_chars: 280,
            }
        );
        assert_eq!(options.min_columns(), 2);
    }
}
