//! # WordPiece Tokenizer
//!
//! A two-stage WordPiece tokenization pipeline, as used by BERT-family
//! models:
//!
//! 1. [`BasicTokenizer`] cleans and normalizes raw text, then splits it
//!    into word-like units on whitespace and punctuation.
//! 2. [`WordPieceEncoder`] decomposes each unit into vocabulary-covered
//!    subword pieces with a greedy longest-match-first search.
//!
//! [`BertTokenizer`] wires the two stages together over a shared
//! [`WordPieceVocab`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wptok::{BertTokenizer, TokenizerConfig, WordPieceVocab};
//!
//! let vocab: Arc<WordPieceVocab<u32>> =
//!     WordPieceVocab::from_tokens(["[UNK]", "un", "##aff", "##able"])
//!         .expect("bad vocab")
//!         .into();
//!
//! let tokenizer = BertTokenizer::new(vocab, TokenizerConfig::default());
//!
//! let tokens = tokenizer.tokenize("unaffable");
//! assert_eq!(tokens, ["un", "##aff", "##able"]);
//!
//! let ids = tokenizer.convert_tokens_to_ids(&tokens).unwrap();
//! assert_eq!(ids, [1, 2, 3]);
//! ```
#![warn(missing_docs, unused)]

pub mod config;
pub mod encoders;
pub mod error;
pub mod segmentation;
pub mod tokenizer;
pub mod types;
pub mod vocab;

pub use config::TokenizerConfig;
pub use encoders::text_tokenizer::TextTokenizer;
pub use encoders::wordpiece_encoder::WordPieceEncoder;
pub use error::{TokenizerError, VocabError};
pub use segmentation::basic_tokenizer::BasicTokenizer;
pub use tokenizer::BertTokenizer;
pub use vocab::WordPieceVocab;

/// Marker prefix for subword pieces that attach to the preceding piece
/// without an intervening space.
pub const CONTINUATION_MARKER: &str = "##";

/// Default cap on the codepoint length of a single unit fed to the
/// WordPiece matcher; longer units map to the unknown-token wholesale.
pub const DEFAULT_MAX_WORD_CHARS: usize = 512;

/// Default value for batch-level parallelism; based on the `rayon` feature.
#[cfg(feature = "rayon")]
pub const DEFAULT_PARALLEL: bool = true;
#[cfg(not(feature = "rayon"))]
pub const DEFAULT_PARALLEL: bool = false;
