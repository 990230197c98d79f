use std::{io::Write, sync::Arc};

use wordbatch::{
    batching::{Batch, BatchSampler, BatchSamplerOptions, DEFAULT_MAX_SEQ_LEN},
    vocab::{WordVocab, io::load_vocab_path},
};

use crate::{
    commands::DEFAULT_VOCAB_SIZE,
    corpus_args::CorpusArgs,
    input_output::OutputArgs,
    logging::LogArgs,
};

/// Output formats for the sample command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SampleFormat {
    /// One tab-separated line per slot.
    Text,

    /// One JSON object per batch.
    Json,
}

/// Args for the sample command.
#[derive(clap::Args, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Slots per batch.
    #[arg(long, default_value_t = 32)]
    batch_size: usize,

    /// Timesteps per slot.
    #[arg(long, default_value_t = DEFAULT_MAX_SEQ_LEN)]
    max_seq_len: usize,

    /// Max vocab size when building a vocabulary [default: 5000].
    #[arg(long, conflicts_with = "vocab")]
    vocab_size: Option<usize>,

    /// Use a saved vocabulary instead of building one; its size is the max.
    #[arg(long, default_value = None)]
    vocab: Option<String>,

    /// Number of batches to draw.
    #[arg(long, default_value_t = 1)]
    batches: usize,

    /// Random seed.
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    #[arg(long, default_value = "text")]
    format: SampleFormat,

    #[command(flatten)]
    output: OutputArgs,
}

/// A JSON view of one batch: active indices per slot, padding dropped.
#[derive(Debug, serde::Serialize)]
struct BatchRecord {
    batch: usize,
    labels: Vec<f32>,
    indices: Vec<Vec<usize>>,
}

impl BatchRecord {
    fn new(
        batch_idx: usize,
        batch: &Batch,
    ) -> Self {
        Self {
            batch: batch_idx,
            labels: batch.labels.to_vec(),
            indices: (0..batch.batch_size())
                .map(|slot| batch.active_indices(slot).into_iter().flatten().collect())
                .collect(),
        }
    }
}

impl SampleArgs {
    /// Sampler options; a saved vocabulary sets the max vocab size.
    fn sampler_options(
        &self,
        vocab: Option<&WordVocab>,
    ) -> BatchSamplerOptions {
        let max_vocab_size = match vocab {
            Some(vocab) => vocab.len(),
            None => self.vocab_size.unwrap_or(DEFAULT_VOCAB_SIZE),
        };
        BatchSamplerOptions::new(self.batch_size, max_vocab_size)
            .with_max_seq_len(self.max_seq_len)
            .with_seed(self.seed)
    }

    /// Run the sample command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let vocab = match &self.vocab {
            Some(path) => {
                log::info!("vocab: {path}");
                Some(load_vocab_path(path)?)
            }
            None => None,
        };
        let options = self.sampler_options(vocab.as_ref());
        options.validate()?;

        let corpus = Arc::new(self.corpus.load()?);
        let mut sampler = match vocab {
            Some(vocab) => BatchSampler::new(corpus, Arc::new(vocab), options)?,
            None => BatchSampler::from_corpus(corpus, options)?,
        };

        let mut writer = self.output.open_writer()?;
        for (batch_idx, batch) in sampler.by_ref().take(self.batches).enumerate() {
            write_batch(&mut writer, self.format, batch_idx, &batch)?;
        }
        writer.flush()?;

        let stats = sampler.stats();
        log::info!(
            "batches: {}, records drawn: {}, re-draws: {}",
            stats.batches,
            stats.records_drawn,
            stats.redraws
        );

        Ok(())
    }
}

fn write_batch(
    writer: &mut dyn Write,
    format: SampleFormat,
    batch_idx: usize,
    batch: &Batch,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        SampleFormat::Text => {
            let record = BatchRecord::new(batch_idx, batch);
            for (slot, (label, indices)) in record.labels.iter().zip(&record.indices).enumerate() {
                let indices: Vec<String> = indices.iter().map(usize::to_string).collect();
                writeln!(
                    writer,
                    "{batch_idx}\t{slot}\t{label}\t{}",
                    indices.join(" ")
                )?;
            }
        }
        SampleFormat::Json => {
            serde_json::to_writer(&mut *writer, &BatchRecord::new(batch_idx, batch))?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
