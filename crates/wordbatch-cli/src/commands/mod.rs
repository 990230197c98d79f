use crate::commands::{encode::EncodeArgs, sample::SampleArgs, vocab::VocabArgs};

pub mod encode;
pub mod sample;
pub mod vocab;

/// Max vocab size when building a vocabulary.
pub const DEFAULT_VOCAB_SIZE: usize = 5000;

/// Subcommands for wordbatch-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary from a corpus.
    Vocab(VocabArgs),

    /// Draw random one-hot batches from a corpus.
    Sample(SampleArgs),

    /// Encode text lines against a saved vocabulary.
    Encode(EncodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Sample(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
        }
    }
}
