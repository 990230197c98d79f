use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use wordbatch::{
    batching::{DEFAULT_MAX_SEQ_LEN, SequenceEncoder},
    vocab::io::load_vocab_path,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Saved vocabulary file.
    #[arg(long)]
    vocab: String,

    /// Timesteps per line; longer lines are truncated.
    #[arg(long, default_value_t = DEFAULT_MAX_SEQ_LEN)]
    max_seq_len: usize,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab = load_vocab_path(&self.vocab)?;
        log::info!("vocab: {} ({} tokens)", self.vocab, vocab.len());
        let encoder = SequenceEncoder::new(Arc::new(vocab), self.max_seq_len)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;
        run_encode(&mut reader, &mut writer, &encoder)
    }
}

/// Write the encoded indices of each input line, space separated.
fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    encoder: &SequenceEncoder,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let indices: Vec<String> = encoder
            .text_indices(&line?)
            .iter()
            .map(usize::to_string)
            .collect();
        writeln!(writer, "{}", indices.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use wordbatch::vocab::WordVocab;

    use super::*;

    #[test]
    fn test_run_encode() {
        let vocab = WordVocab::from_tokens(["good", "bad"]).unwrap();
        let encoder = SequenceEncoder::new(Arc::new(vocab), 3).unwrap();

        let mut reader: &[u8] = b"Good, ugly!\nbad bad bad bad\n\n";
        let mut out: Vec<u8> = Vec::new();
        run_encode(&mut reader, &mut out, &encoder).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1 0\n2 2 2\n\n");
    }
}
