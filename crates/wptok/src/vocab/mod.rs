//! # Vocabulary

pub mod io;
pub mod word_piece_vocab;

pub use word_piece_vocab::WordPieceVocab;
