//! # Basic Tokenizer
//!
//! Turns raw text into an ordered sequence of normalized word-like units
//! ready for WordPiece matching: cleans control characters, isolates CJK
//! ideographs, optionally case-folds and accent-strips, and splits on
//! whitespace and punctuation. Tokens in the never-split set pass through
//! all of it verbatim.

use crate::config::TokenizerConfig;
use crate::segmentation::chars::{
    is_cjk_char, is_control_char, is_punctuation_char, is_whitespace_char,
};
use crate::types::NeverSplitSet;
use compact_str::CompactString;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Text normalizer and splitter.
///
/// A pure function of its input plus the immutable flags below; safe to
/// share across threads.
#[derive(Debug, Clone)]
pub struct BasicTokenizer {
    do_lower_case: bool,
    tokenize_cjk_chars: bool,
    never_split: NeverSplitSet,
}

impl Default for BasicTokenizer {
    fn default() -> Self {
        Self::new(true, true, Vec::<String>::new())
    }
}

impl From<&TokenizerConfig> for BasicTokenizer {
    fn from(config: &TokenizerConfig) -> Self {
        Self::new(
            config.do_lower_case,
            config.tokenize_cjk_chars,
            &config.never_split,
        )
    }
}

impl BasicTokenizer {
    /// Create a new basic tokenizer.
    ///
    /// # Arguments
    /// * `do_lower_case` - lowercase and accent-strip candidates.
    /// * `tokenize_cjk_chars` - isolate CJK ideographs into single units.
    /// * `never_split` - tokens exempt from splitting, matched verbatim.
    pub fn new<I, S>(
        do_lower_case: bool,
        tokenize_cjk_chars: bool,
        never_split: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            do_lower_case,
            tokenize_cjk_chars,
            never_split: never_split
                .into_iter()
                .map(|s| CompactString::from(s.as_ref()))
                .collect(),
        }
    }

    /// Split raw text into normalized units.
    ///
    /// # Returns
    /// Ordered units; empty input yields an empty vector, and no unit is
    /// ever the empty string.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<CompactString> {
        let cleaned = clean_text(text);
        let cleaned = if self.tokenize_cjk_chars {
            isolate_cjk_chars(&cleaned)
        } else {
            cleaned
        };

        let mut split: Vec<CompactString> = Vec::new();
        for candidate in cleaned.split_whitespace() {
            if self.never_split.contains(candidate) {
                split.push(CompactString::from(candidate));
                continue;
            }

            if self.do_lower_case {
                let folded = strip_accents(&candidate.to_lowercase());
                split_on_punctuation(&folded, &mut split);
            } else {
                split_on_punctuation(candidate, &mut split);
            }
        }

        // Accent stripping can surface fresh separators; re-split once
        // more to guarantee whitespace-free units.
        split
            .iter()
            .flat_map(|unit| unit.split_whitespace())
            .map(CompactString::from)
            .collect()
    }
}

/// Remove control characters and normalize whitespace to plain spaces.
///
/// The null character and U+FFFD are dropped along with controls.
fn clean_text(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            if c == '\u{0000}' || c == '\u{FFFD}' || is_control_char(c) {
                None
            } else if is_whitespace_char(c) {
                Some(' ')
            } else {
                Some(c)
            }
        })
        .collect()
}

/// Surround every CJK ideograph with spaces so the whitespace split
/// turns each one into its own unit.
fn isolate_cjk_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_cjk_char(c) {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Strip combining diacritical marks after canonical decomposition.
fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Split a candidate around punctuation, appending to `out`.
///
/// Punctuation characters become single-char units and are never merged
/// with adjacent letters or digits.
fn split_on_punctuation(
    token: &str,
    out: &mut Vec<CompactString>,
) {
    let mut current = CompactString::default();
    for c in token.chars() {
        if is_punctuation_char(c) {
            if !current.is_empty() {
                out.push(core::mem::take(&mut current));
            }
            let mut unit = CompactString::default();
            unit.push(c);
            out.push(unit);
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}
