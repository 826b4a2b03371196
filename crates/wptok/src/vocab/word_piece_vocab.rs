//! # WordPiece Token Vocabulary
//!
//! An immutable bidirectional mapping between token strings and dense
//! integer ids, built once from an ordered token sequence and read-only
//! for the remainder of the process lifetime.

use crate::error::VocabError;
use crate::types::{TokenToIdMap, TokenType};
use compact_str::CompactString;

/// Bidirectional ``{ token <-> T }`` vocabulary with dense ids.
///
/// Ids are zero-based positions in the source token sequence. Duplicate
/// token strings keep their line in the id => token direction, but the
/// token => id direction resolves to the last occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPieceVocab<T: TokenType> {
    /// Tokens in id order.
    tokens: Vec<CompactString>,

    /// Map of ``{ token -> T }``.
    token_ids: TokenToIdMap<T>,

    /// Number of duplicate token strings seen during construction.
    duplicates: usize,
}

impl<T: TokenType> WordPieceVocab<T> {
    /// Build a vocabulary from an ordered token sequence.
    ///
    /// # Arguments
    /// * `tokens` - token strings, in id order.
    ///
    /// # Errors
    /// * [`VocabError::Empty`] if the sequence yields no tokens.
    /// * [`VocabError::IdOverflow`] if a position does not fit `T`.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, VocabError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<CompactString> = tokens
            .into_iter()
            .map(|s| CompactString::from(s.as_ref()))
            .collect();

        if tokens.is_empty() {
            return Err(VocabError::Empty);
        }

        let mut token_ids = TokenToIdMap::with_capacity(tokens.len());
        let mut duplicates = 0;
        for (index, token) in tokens.iter().enumerate() {
            let id = T::from_usize(index).ok_or(VocabError::IdOverflow(index))?;

            // Sequential insertion: a repeated token string shadows its
            // earlier id in this direction.
            if token_ids.insert(token.clone(), id).is_some() {
                duplicates += 1;
                tracing::warn!(token = %token, id = index, "duplicate vocabulary token; last occurrence wins");
            }
        }

        tracing::debug!(vocab_size = tokens.len(), duplicates, "vocabulary built");

        Ok(Self {
            tokens,
            token_ids,
            duplicates,
        })
    }

    /// The number of entries in the vocabulary.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the vocabulary contains no tokens.
    ///
    /// Construction rejects empty sources, so this is `false` for any
    /// successfully built vocabulary.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of duplicate token strings seen during construction.
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    /// Returns `true` if the token string is present.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_ids.contains_key(token)
    }

    /// Return the id for the token string, if any.
    pub fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_ids.get(token).copied()
    }

    /// Return the token string for the id, if any.
    pub fn lookup_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.tokens
            .get(id.to_usize()?)
            .map(CompactString::as_str)
    }

    /// Iterate over `(token, id)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.tokens.iter().enumerate().map(|(index, token)| {
            // Positions were validated against T at construction.
            (token.as_str(), T::from_usize(index).unwrap())
        })
    }
}
