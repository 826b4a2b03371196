//! # Error Types

use thiserror::Error;

/// Errors raised while building a [`crate::WordPieceVocab`].
///
/// Construction is all-or-nothing: a tokenizer is never left holding a
/// partially loaded or empty vocabulary.
#[derive(Debug, Error)]
pub enum VocabError {
    /// The vocabulary source could not be read.
    #[error("failed to read vocabulary source")]
    Io(#[from] std::io::Error),

    /// The vocabulary source contained no tokens.
    #[error("vocabulary source contained no tokens")]
    Empty,

    /// A line index does not fit the configured token id type.
    #[error("token id {0} does not fit the configured token id type")]
    IdOverflow(usize),
}

/// Errors raised by [`crate::BertTokenizer`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizerError {
    /// A token passed to id-conversion is absent from the vocabulary.
    ///
    /// Explicit id lookup has no unknown-token fallback; that fallback
    /// only applies during tokenization itself.
    #[error("token {0:?} is not present in the vocabulary")]
    UnknownToken(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VocabError::Empty;
        assert_eq!(err.to_string(), "vocabulary source contained no tokens");

        let err = VocabError::IdOverflow(70_000);
        assert_eq!(
            err.to_string(),
            "token id 70000 does not fit the configured token id type"
        );

        let err = TokenizerError::UnknownToken("fnord".to_string());
        assert_eq!(
            err.to_string(),
            "token \"fnord\" is not present in the vocabulary"
        );
    }
}
