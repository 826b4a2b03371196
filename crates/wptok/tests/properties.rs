//! Property tests for the tokenization pipeline.

use num_traits::ToPrimitive;
use proptest::prelude::*;
use std::sync::Arc;
use wptok::{BertTokenizer, TokenizerConfig, WordPieceVocab};

/// A vocabulary covering every lowercase ASCII letter, digit, and ASCII
/// punctuation mark, in both initial and continuation form, so that any
/// ASCII input decomposes without the unknown fallback.
fn full_ascii_tokenizer() -> BertTokenizer<u32> {
    let mut tokens: Vec<String> = vec!["[UNK]".to_string()];
    for c in ('a'..='z').chain('0'..='9') {
        tokens.push(c.to_string());
        tokens.push(format!("##{c}"));
    }
    for b in 0x21u8..=0x7E {
        let c = b as char;
        if c.is_ascii_punctuation() {
            tokens.push(c.to_string());
        }
    }

    let vocab = Arc::new(WordPieceVocab::from_tokens(&tokens).unwrap());
    BertTokenizer::new(vocab, TokenizerConfig::default())
}

proptest! {
    #[test]
    fn tokenize_is_idempotent(text in "[ -~\\t\\n]{0,80}") {
        let tokenizer = full_ascii_tokenizer();
        prop_assert_eq!(tokenizer.tokenize(&text), tokenizer.tokenize(&text));
    }

    #[test]
    fn ids_are_always_in_range(text in "\\PC{0,40}") {
        let tokenizer = full_ascii_tokenizer();
        let tokens = tokenizer.tokenize(&text);
        // Every emitted token is vocabulary-covered (or the unknown
        // token), so id conversion must succeed with in-range ids.
        let ids = tokenizer.convert_tokens_to_ids(&tokens).unwrap();
        for id in ids {
            prop_assert!(id.to_usize().unwrap() < tokenizer.vocab_size());
        }
    }

    #[test]
    fn no_unit_is_empty(text in "\\PC{0,40}") {
        let tokenizer = full_ascii_tokenizer();
        for token in tokenizer.tokenize(&text) {
            prop_assert!(!token.is_empty());
        }
    }

    #[test]
    fn ascii_words_never_hit_unknown(word in "[a-z]{1,20}") {
        let tokenizer = full_ascii_tokenizer();
        let tokens = tokenizer.tokenize(&word);
        prop_assert!(!tokens.is_empty());
        for token in &tokens {
            prop_assert_ne!(token.as_str(), "[UNK]");
        }
    }
}
