//! # WordPiece Encoder
//!
//! Greedy longest-match-first decomposition of a normalized unit into
//! vocabulary-covered subword pieces.

use crate::types::TokenType;
use crate::vocab::WordPieceVocab;
use crate::{CONTINUATION_MARKER, DEFAULT_MAX_WORD_CHARS};
use compact_str::{CompactString, format_compact};
use std::sync::Arc;

/// Subword matcher over a shared, read-only vocabulary.
#[derive(Debug, Clone)]
pub struct WordPieceEncoder<T: TokenType> {
    vocab: Arc<WordPieceVocab<T>>,
    unk_token: CompactString,
    max_chars_per_word: usize,
}

impl<T: TokenType> WordPieceEncoder<T> {
    /// Create a new WordPiece encoder.
    ///
    /// # Arguments
    /// * `vocab` - the shared vocabulary to match against.
    /// * `unk_token` - emitted for units with no valid decomposition.
    pub fn new<S: AsRef<str>>(
        vocab: Arc<WordPieceVocab<T>>,
        unk_token: S,
    ) -> Self {
        Self {
            vocab,
            unk_token: CompactString::from(unk_token.as_ref()),
            max_chars_per_word: DEFAULT_MAX_WORD_CHARS,
        }
    }

    /// Replace the per-unit codepoint cap.
    pub fn with_max_chars_per_word(
        self,
        max_chars_per_word: usize,
    ) -> Self {
        Self {
            max_chars_per_word,
            ..self
        }
    }

    /// The unknown token emitted on decomposition failure.
    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }

    /// Decompose one normalized unit into subword pieces.
    ///
    /// At each cursor position the longest vocabulary-known substring
    /// wins; non-initial pieces carry the `##` continuation marker. A
    /// unit with no full decomposition collapses to the unknown-token
    /// (all-or-nothing per unit). Greedy matching is not guaranteed
    /// globally optimal; that is the accepted WordPiece behavior.
    ///
    /// # Returns
    /// The piece list; empty for an empty unit.
    pub fn tokenize_unit(
        &self,
        unit: &str,
    ) -> Vec<CompactString> {
        // Char-boundary byte offsets, plus the end of the string.
        let mut offsets: Vec<usize> = unit.char_indices().map(|(i, _)| i).collect();
        offsets.push(unit.len());
        let char_len = offsets.len() - 1;

        if char_len > self.max_chars_per_word {
            return vec![self.unk_token.clone()];
        }

        let mut pieces: Vec<CompactString> = Vec::new();
        let mut cursor = 0;
        while cursor < char_len {
            let mut end = char_len;
            let mut matched: Option<CompactString> = None;

            while end > cursor {
                let slice = &unit[offsets[cursor]..offsets[end]];
                let candidate = if cursor > 0 {
                    format_compact!("{CONTINUATION_MARKER}{slice}")
                } else {
                    CompactString::from(slice)
                };

                if self.vocab.contains(&candidate) {
                    matched = Some(candidate);
                    break;
                }
                end -= 1;
            }

            match matched {
                Some(piece) => {
                    pieces.push(piece);
                    cursor = end;
                }
                // All-or-nothing: partial pieces are discarded.
                None => return vec![self.unk_token.clone()],
            }
        }

        pieces
    }
}
