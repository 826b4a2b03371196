//! # Subword Encoders

pub mod text_tokenizer;
pub mod wordpiece_encoder;

pub use text_tokenizer::TextTokenizer;
pub use wordpiece_encoder::WordPieceEncoder;
