//! # Labeled Corpus Loader

use std::{fs::File, io::Read, path::Path};

use crate::{
    corpus::{CorpusOptions, Record},
    errors::{WBResult, WordbatchError},
};

/// An in-memory labeled corpus.
///
/// Loaded once, and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Corpus {
    options: CorpusOptions,
    records: Vec<Record>,
}

impl Corpus {
    /// Build a corpus from records already in memory.
    pub fn from_records(
        records: Vec<Record>,
        options: CorpusOptions,
    ) -> Self {
        Self { options, records }
    }

    /// Load a corpus from a delimited text file.
    ///
    /// ## Arguments
    /// * `path` - path to the corpus file.
    /// * `options` - column layout and eligibility options.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(path, options)))]
    pub fn load_path<P: AsRef<Path>>(
        path: P,
        options: CorpusOptions,
    ) -> WBResult<Self> {
        let path = path.as_ref();
        log::debug!("loading corpus: {}", path.display());
        let corpus = Self::read(File::open(path)?, options)?;
        log::info!(
            "loaded {} records ({} eligible) from {}",
            corpus.len(),
            corpus.eligible_count(),
            path.display()
        );
        Ok(corpus)
    }

    /// Read a corpus from delimited text.
    ///
    /// Rows may have more columns than the layout uses;
    /// rows with too few columns, or a non-numeric or non-finite label,
    /// are data errors.
    pub fn read<R: Read>(
        reader: R,
        options: CorpusOptions,
    ) -> WBResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(options.has_headers)
            .delimiter(options.delimiter)
            .flexible(true)
            .from_reader(reader);

        let min_columns = options.min_columns();
        let mut records = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            let row = row?;
            let line = row.position().map_or(idx as u64 + 1, |p| p.line());

            if row.len() < min_columns {
                return Err(WordbatchError::data(format!(
                    "row {line}: expected at least {min_columns} columns, found {}",
                    row.len()
                )));
            }

            let label_field = &row[options.label_column];
            let label: f32 = label_field.trim().parse().map_err(|_| {
                WordbatchError::data(format!("row {line}: label {label_field:?} is not a number"))
            })?;
            if !label.is_finite() {
                return Err(WordbatchError::data(format!(
                    "row {line}: label {label_field:?} is not finite"
                )));
            }

            records.push(Record::new(label, &row[options.text_column]));
        }

        Ok(Self { options, records })
    }

    /// The options this corpus was loaded with.
    pub fn options(&self) -> &CorpusOptions {
        &self.options
    }

    /// The maximum text length of an eligible record.
    pub fn max_text_chars(&self) -> usize {
        self.options.max_text_chars
    }

    /// All records, in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the corpus empty?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Is the record short enough to be used?
    pub fn is_eligible(
        &self,
        record: &Record,
    ) -> bool {
        record.fits(self.options.max_text_chars)
    }

    /// Iterate the eligible records, in file order.
    pub fn eligible_records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| self.is_eligible(r))
    }

    /// The number of eligible records.
    pub fn eligible_count(&self) -> usize {
        self.eligible_records().count()
    }
}
