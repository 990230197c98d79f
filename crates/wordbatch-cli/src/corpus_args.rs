use wordbatch::corpus::{
    Corpus,
    CorpusOptions,
    DEFAULT_LABEL_COLUMN,
    DEFAULT_MAX_TEXT_CHARS,
    DEFAULT_TEXT_COLUMN,
};

/// Corpus layout arg group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Path to the labeled corpus.
    pub corpus: String,

    /// Zero-indexed label column.
    #[arg(long, default_value_t = DEFAULT_LABEL_COLUMN)]
    pub label_column: usize,

    /// Zero-indexed text column.
    #[arg(long, default_value_t = DEFAULT_TEXT_COLUMN)]
    pub text_column: usize,

    /// Field delimiter; a single ASCII character.
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Skip a header row.
    #[arg(long)]
    pub has_headers: bool,

    /// Records with longer text are ignored.
    #[arg(long, default_value_t = DEFAULT_MAX_TEXT_CHARS)]
    pub max_text_chars: usize,
}

impl CorpusArgs {
    /// Build the corpus options.
    pub fn options(&self) -> Result<CorpusOptions, Box<dyn std::error::Error>> {
        if !self.delimiter.is_ascii() {
            return Err(format!("delimiter {:?} is not ASCII", self.delimiter).into());
        }

        Ok(CorpusOptions::default()
            .with_label_column(self.label_column)
            .with_text_column(self.text_column)
            .with_delimiter(self.delimiter as u8)
            .with_has_headers(self.has_headers)
            .with_max_text_chars(self.max_text_chars))
    }

    /// Load the corpus.
    pub fn load(&self) -> Result<Corpus, Box<dyn std::error::Error>> {
        log::info!("corpus: {}", self.corpus);
        Ok(Corpus::load_path(&self.corpus, self.options()?)?)
    }
}
