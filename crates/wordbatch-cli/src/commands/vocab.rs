use std::io::Write;

use wordbatch::vocab::{VocabBuilderOptions, io::write_vocab};

use crate::{
    commands::DEFAULT_VOCAB_SIZE,
    corpus_args::CorpusArgs,
    input_output::OutputArgs,
    logging::LogArgs,
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Max vocab size.
    #[arg(long, default_value_t = DEFAULT_VOCAB_SIZE)]
    vocab_size: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let builder = VocabBuilderOptions::new(self.vocab_size).init()?;
        let corpus = self.corpus.load()?;

        log::info!("Building vocabulary...");
        let vocab = builder.build(&corpus)?;
        log::info!("Vocabulary Size: {}", vocab.len());

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_vocab(&vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
