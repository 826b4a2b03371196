//! # Tokenizer Configuration

use crate::DEFAULT_MAX_WORD_CHARS;
use serde::{Deserialize, Serialize};

/// Configuration bundle for [`crate::BertTokenizer`].
///
/// Constructed once, immutable for the lifetime of the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Lowercase and accent-strip candidates during basic tokenization.
    pub do_lower_case: bool,

    /// Run basic tokenization before WordPiece matching.
    ///
    /// When disabled, raw text is fed to the matcher as a single unit.
    pub do_basic_tokenize: bool,

    /// Surround CJK ideographs with spaces so each becomes its own unit.
    pub tokenize_cjk_chars: bool,

    /// Tokens exempt from splitting and case-folding, matched verbatim.
    pub never_split: Vec<String>,

    /// The unknown token, substituted for units with no vocabulary
    /// decomposition.
    pub unk_token: String,

    /// The sequence separator token.
    pub sep_token: String,

    /// The padding token.
    pub pad_token: String,

    /// The sequence classifier token.
    pub cls_token: String,

    /// The masked-language-modeling token.
    pub mask_token: String,

    /// Codepoint cap per unit for the WordPiece matcher.
    pub max_chars_per_word: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            do_lower_case: true,
            do_basic_tokenize: true,
            tokenize_cjk_chars: true,
            never_split: Vec::new(),
            unk_token: "[UNK]".to_string(),
            sep_token: "[SEP]".to_string(),
            pad_token: "[PAD]".to_string(),
            cls_token: "[CLS]".to_string(),
            mask_token: "[MASK]".to_string(),
            max_chars_per_word: DEFAULT_MAX_WORD_CHARS,
        }
    }
}

impl TokenizerConfig {
    /// Set the case-folding flag.
    pub fn with_lower_case(
        self,
        do_lower_case: bool,
    ) -> Self {
        Self {
            do_lower_case,
            ..self
        }
    }

    /// Set the basic-tokenization flag.
    pub fn with_basic_tokenize(
        self,
        do_basic_tokenize: bool,
    ) -> Self {
        Self {
            do_basic_tokenize,
            ..self
        }
    }

    /// Set the CJK-isolation flag.
    pub fn with_cjk_chars(
        self,
        tokenize_cjk_chars: bool,
    ) -> Self {
        Self {
            tokenize_cjk_chars,
            ..self
        }
    }

    /// Replace the never-split set.
    pub fn with_never_split<I, S>(
        self,
        never_split: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            never_split: never_split
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            ..self
        }
    }

    /// Replace the unknown token.
    pub fn with_unk_token<S: AsRef<str>>(
        self,
        unk_token: S,
    ) -> Self {
        Self {
            unk_token: unk_token.as_ref().to_string(),
            ..self
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TokenizerConfig::default();
        assert!(config.do_lower_case);
        assert!(config.do_basic_tokenize);
        assert!(config.tokenize_cjk_chars);
        assert!(config.never_split.is_empty());
        assert_eq!(config.unk_token, "[UNK]");
        assert_eq!(config.sep_token, "[SEP]");
        assert_eq!(config.pad_token, "[PAD]");
        assert_eq!(config.cls_token, "[CLS]");
        assert_eq!(config.mask_token, "[MASK]");
        assert_eq!(config.max_chars_per_word, 512);
    }

    #[test]
    fn test_builders() {
        let config = TokenizerConfig::default()
            .with_lower_case(false)
            .with_cjk_chars(false)
            .with_never_split(["[SPECIAL]"])
            .with_unk_token("<unk>")
            .with_max_chars_per_word(100);

        assert!(!config.do_lower_case);
        assert!(!config.tokenize_cjk_chars);
        assert_eq!(config.never_split, ["[SPECIAL]"]);
        assert_eq!(config.unk_token, "<unk>");
        assert_eq!(config.max_chars_per_word, 100);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = TokenizerConfig::default().with_never_split(["[SPECIAL]"]);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TokenizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_serde_partial() {
        let parsed: TokenizerConfig =
            serde_json::from_str(r#"{"do_lower_case": false}"#).unwrap();
        assert!(!parsed.do_lower_case);
        assert_eq!(parsed.unk_token, "[UNK]");
        assert_eq!(parsed.max_chars_per_word, 512);
    }
}
