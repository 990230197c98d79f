//! # Vocabulary IO
//!
//! Vocabularies are stored one token per line, in rank order:
//! ```terminaloutput
//! {RANK 0 TOKEN}
//! {RANK 1 TOKEN}
//! ...
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{WBResult, WordbatchError},
    types::WBHashSet,
    vocab::WordVocab,
};

/// Load a [`WordVocab`] from a vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_path<P: AsRef<Path>>(path: P) -> WBResult<WordVocab> {
    let reader = BufReader::new(File::open(path)?);
    read_vocab(reader)
}

/// Read a [`WordVocab`] from a vocab line reader.
///
/// Empty lines, whitespace inside a token, and duplicate tokens
/// are parse errors.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_vocab<R: BufRead>(reader: R) -> WBResult<WordVocab> {
    let mut tokens = Vec::new();
    let mut seen = WBHashSet::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let token = line.trim_end_matches('\r');
        let lineno = idx + 1;

        if token.is_empty() {
            return Err(WordbatchError::Parse(format!("line {lineno}: empty token")));
        }
        if token.chars().any(char::is_whitespace) {
            return Err(WordbatchError::Parse(format!(
                "line {lineno}: token {token:?} contains whitespace"
            )));
        }
        if !seen.insert(token.to_string()) {
            return Err(WordbatchError::Parse(format!(
                "line {lineno}: duplicate token {token:?}"
            )));
        }
        tokens.push(token.to_string());
    }

    WordVocab::from_tokens(tokens)
}

/// Save a [`WordVocab`] to a vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<P: AsRef<Path>>(
    vocab: &WordVocab,
    path: P,
) -> WBResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`WordVocab`] to a [`Write`] writer.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_vocab<W: Write>(
    vocab: &WordVocab,
    writer: &mut W,
) -> WBResult<()> {
    for token in vocab.iter() {
        writeln!(writer, "{token}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_vocab() {
        let vocab = WordVocab::from_tokens(["the", "cat", "café"]).unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.txt");

                save_vocab_path(&vocab, &path).expect("Failed to save vocab");
                assert_eq!(std::fs::read_to_string(&path)?, "the\ncat\ncafé\n");

                let loaded = load_vocab_path(&path).expect("Failed to load vocab");
                assert_eq!(loaded, vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_read_crlf() {
        let vocab = read_vocab("a\r\nb\r\n".as_bytes()).unwrap();
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_read_rejects_bad_lines() {
        for text in ["a\n\nb\n", "a\nb c\n", "a\nb\na\n"] {
            let err = read_vocab(text.as_bytes()).unwrap_err();
            assert!(matches!(err, WordbatchError::Parse(_)), "{text:?}: {err}");
        }
    }
}
