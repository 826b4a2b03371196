//! # Text Tokenizer Trait

use compact_str::CompactString;

/// Capability interface for pluggable tokenization schemes.
///
/// Implementations are pure functions of their input plus immutable
/// construction-time state, so a single instance may serve arbitrarily
/// many concurrent callers.
pub trait TextTokenizer: Send + Sync {
    /// Tokenize a piece of text into subword token strings.
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<CompactString>;

    /// Tokenize a batch of texts.
    fn tokenize_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<CompactString>> {
        batch.iter().map(|text| self.tokenize(text)).collect()
    }
}
