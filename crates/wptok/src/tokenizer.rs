//! # BERT Tokenizer Facade
//!
//! Orchestrates the two pipeline stages over a shared vocabulary:
//! raw text -> [`BasicTokenizer`] -> normalized units ->
//! [`WordPieceEncoder`] -> subword token strings -> ids.

use crate::CONTINUATION_MARKER;
use crate::config::TokenizerConfig;
use crate::encoders::text_tokenizer::TextTokenizer;
use crate::encoders::wordpiece_encoder::WordPieceEncoder;
use crate::error::{TokenizerError, VocabError};
use crate::segmentation::basic_tokenizer::BasicTokenizer;
use crate::types::TokenType;
use crate::vocab::WordPieceVocab;
use crate::vocab::io::{load_vocab_from_path, load_vocab_from_reader};
use compact_str::CompactString;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// WordPiece tokenizer for BERT-family models.
///
/// The vocabulary and configuration are fixed at construction; every
/// operation afterwards is a pure function of its arguments, so the
/// tokenizer may be shared freely across threads.
#[derive(Debug, Clone)]
pub struct BertTokenizer<T: TokenType> {
    config: TokenizerConfig,
    vocab: Arc<WordPieceVocab<T>>,
    basic: Option<BasicTokenizer>,
    wordpiece: WordPieceEncoder<T>,
}

impl<T: TokenType> BertTokenizer<T> {
    /// Create a tokenizer over an already-built vocabulary.
    pub fn new(
        vocab: Arc<WordPieceVocab<T>>,
        config: TokenizerConfig,
    ) -> Self {
        let basic = config
            .do_basic_tokenize
            .then(|| BasicTokenizer::from(&config));

        let wordpiece = WordPieceEncoder::new(vocab.clone(), &config.unk_token)
            .with_max_chars_per_word(config.max_chars_per_word);

        Self {
            config,
            vocab,
            basic,
            wordpiece,
        }
    }

    /// Create a tokenizer, loading the vocabulary from a byte stream.
    ///
    /// # Arguments
    /// * `reader` - the already-open vocabulary source, one token per
    ///   line in id order.
    pub fn from_reader<R: Read>(
        reader: R,
        config: TokenizerConfig,
    ) -> Result<Self, VocabError> {
        let vocab = load_vocab_from_reader(reader)?;
        Ok(Self::new(Arc::new(vocab), config))
    }

    /// Create a tokenizer, loading the vocabulary from a file path.
    pub fn from_vocab_path<P: AsRef<Path>>(
        path: P,
        config: TokenizerConfig,
    ) -> Result<Self, VocabError> {
        let vocab = load_vocab_from_path(path)?;
        Ok(Self::new(Arc::new(vocab), config))
    }

    /// The tokenizer configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// The shared vocabulary.
    pub fn vocab(&self) -> &Arc<WordPieceVocab<T>> {
        &self.vocab
    }

    /// The number of entries in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Tokenize a piece of text into its word pieces.
    ///
    /// Runs basic tokenization first unless disabled by configuration,
    /// in which case the raw text is fed to the matcher as one unit.
    ///
    /// For example: input `"unaffable"`, output `["un", "##aff", "##able"]`.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<CompactString> {
        match &self.basic {
            Some(basic) => {
                let units = basic.tokenize(text);
                let mut tokens = Vec::with_capacity(units.len());
                for unit in &units {
                    tokens.extend(self.wordpiece.tokenize_unit(unit));
                }
                tokens
            }
            None => self.wordpiece.tokenize_unit(text),
        }
    }

    /// Look up the id of every token.
    ///
    /// # Errors
    /// [`TokenizerError::UnknownToken`] on the first token absent from
    /// the vocabulary. There is no unknown-token fallback here; that
    /// fallback applies only during tokenization itself.
    pub fn convert_tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<Vec<T>, TokenizerError> {
        tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                self.vocab
                    .lookup_id(token)
                    .ok_or_else(|| TokenizerError::UnknownToken(token.to_string()))
            })
            .collect()
    }

    /// Join tokens into a single surface string.
    ///
    /// Strips the continuation marker and joins with single spaces. This
    /// is a lossy, best-effort reconstruction: original spacing around
    /// punctuation is not recovered.
    pub fn convert_tokens_to_string<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> String {
        tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                token.strip_prefix(CONTINUATION_MARKER).unwrap_or(token)
            })
            .collect::<Vec<&str>>()
            .join(" ")
    }

    /// Id of the unknown token, if present in the vocabulary.
    pub fn unk_token_id(&self) -> Option<T> {
        self.vocab.lookup_id(&self.config.unk_token)
    }

    /// Id of the separator token, if present in the vocabulary.
    pub fn sep_token_id(&self) -> Option<T> {
        self.vocab.lookup_id(&self.config.sep_token)
    }

    /// Id of the padding token, if present in the vocabulary.
    pub fn pad_token_id(&self) -> Option<T> {
        self.vocab.lookup_id(&self.config.pad_token)
    }

    /// Id of the classifier token, if present in the vocabulary.
    pub fn cls_token_id(&self) -> Option<T> {
        self.vocab.lookup_id(&self.config.cls_token)
    }

    /// Id of the mask token, if present in the vocabulary.
    pub fn mask_token_id(&self) -> Option<T> {
        self.vocab.lookup_id(&self.config.mask_token)
    }
}

impl<T: TokenType> TextTokenizer for BertTokenizer<T> {
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<CompactString> {
        BertTokenizer::tokenize(self, text)
    }

    #[cfg(feature = "rayon")]
    fn tokenize_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<CompactString>> {
        use rayon::prelude::*;
        batch.par_iter().map(|text| self.tokenize(text)).collect()
    }
}
