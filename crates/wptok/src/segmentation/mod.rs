//! # Text Normalization and Splitting

pub mod basic_tokenizer;
pub mod chars;

pub use basic_tokenizer::BasicTokenizer;
