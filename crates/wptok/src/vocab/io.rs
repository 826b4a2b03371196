//! # Vocabulary IO
//!
//! Loads a [`WordPieceVocab`] from a plain-text token list: one UTF-8
//! token per line, file order assigning the zero-based id.

use crate::error::VocabError;
use crate::types::TokenType;
use crate::vocab::WordPieceVocab;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Load a [`WordPieceVocab`] from a readable byte stream.
///
/// # Arguments
/// * `reader` - the already-open vocabulary source.
///
/// # Errors
/// * [`VocabError::Io`] if the stream cannot be read.
/// * [`VocabError::Empty`] if the stream yields no lines.
/// * [`VocabError::IdOverflow`] if a line index does not fit `T`.
pub fn load_vocab_from_reader<T: TokenType, R: Read>(
    reader: R
) -> Result<WordPieceVocab<T>, VocabError> {
    let reader = BufReader::new(reader);
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    WordPieceVocab::from_tokens(lines)
}

/// Load a [`WordPieceVocab`] from a vocabulary file path.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_from_path<T: TokenType, P: AsRef<Path>>(
    path: P
) -> Result<WordPieceVocab<T>, VocabError> {
    let file = std::fs::File::open(path)?;
    load_vocab_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    #[test]
    fn test_load_from_reader() {
        type T = u32;
        let source = "[PAD]\n[UNK]\nhello\n##s\n";
        let vocab = load_vocab_from_reader::<T, _>(Cursor::new(source)).unwrap();

        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.lookup_id("[PAD]"), Some(0));
        assert_eq!(vocab.lookup_id("##s"), Some(3));
        assert_eq!(vocab.lookup_token(2), Some("hello"));
    }

    #[test]
    fn test_load_crlf_lines() {
        type T = u32;
        let source = "[UNK]\r\nhello\r\n";
        let vocab = load_vocab_from_reader::<T, _>(Cursor::new(source)).unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.lookup_id("hello"), Some(1));
    }

    #[test]
    fn test_load_empty_stream() {
        type T = u32;
        let result = load_vocab_from_reader::<T, _>(Cursor::new(""));
        assert!(matches!(result, Err(VocabError::Empty)));
    }

    #[test]
    fn test_load_from_path() {
        type T = u32;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.txt");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[UNK]").unwrap();
        writeln!(file, "world").unwrap();
        drop(file);

        let vocab = load_vocab_from_path::<T, _>(&path).unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.lookup_id("world"), Some(1));
    }

    #[test]
    fn test_load_missing_path() {
        type T = u32;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-vocab.txt");

        let result = load_vocab_from_path::<T, _>(&path);
        assert!(matches!(result, Err(VocabError::Io(_))));
    }
}
