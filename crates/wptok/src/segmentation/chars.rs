//! # Character Classification
//!
//! Codepoint classes the normalizer splits on. Whitespace and control
//! follow the Unicode general categories; punctuation covers ASCII plus
//! the common Unicode punctuation blocks rather than the full category
//! database, which is sufficient for BERT-style text splitting.

/// Returns `true` for characters normalized to a plain space.
///
/// Covers ASCII whitespace and the Unicode space separators, including
/// non-breaking forms.
pub fn is_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r') || c.is_whitespace()
}

/// Returns `true` for control characters removed during cleaning.
///
/// Tab, newline and carriage return are treated as whitespace instead.
pub fn is_control_char(c: char) -> bool {
    if matches!(c, '\t' | '\n' | '\r') {
        return false;
    }
    c.is_control()
}

/// Returns `true` for codepoints in the CJK Unified Ideograph blocks.
///
/// Deliberately excludes Hangul, Katakana and Hiragana: those scripts
/// write words with multiple characters, while ideographs are isolated
/// one per unit.
pub fn is_cjk_char(c: char) -> bool {
    let cp = c as u32;
    (0x4E00..=0x9FFF).contains(&cp)
        || (0x3400..=0x4DBF).contains(&cp)
        || (0x20000..=0x2A6DF).contains(&cp)
        || (0x2A700..=0x2B73F).contains(&cp)
        || (0x2B740..=0x2B81F).contains(&cp)
        || (0x2B820..=0x2CEAF).contains(&cp)
        || (0xF900..=0xFAFF).contains(&cp)
        || (0x2F800..=0x2FA1F).contains(&cp)
}

/// Returns `true` for characters split into their own single-char unit.
///
/// All ASCII non-alphanumeric graphic characters count as punctuation,
/// matching BERT's treatment of characters like `$` and `^` that are not
/// in the Unicode `P` category.
pub fn is_punctuation_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }

    // Common Unicode punctuation blocks for non-ASCII.
    let cp = c as u32;
    (0x00A1..=0x00BF).contains(&cp)       // Latin-1 Supplement punctuation
        || (0x2010..=0x2027).contains(&cp) // General Punctuation: dashes, quotes
        || (0x2030..=0x205E).contains(&cp) // General Punctuation: marks
        || (0x2E00..=0x2E7F).contains(&cp) // Supplemental Punctuation
        || (0x3001..=0x303F).contains(&cp) // CJK Symbols and Punctuation
        || (0xFE30..=0xFE4F).contains(&cp) // CJK Compatibility Forms
        || (0xFE50..=0xFE6F).contains(&cp) // Small Form Variants
        || (0xFF01..=0xFF0F).contains(&cp) // Fullwidth ASCII punctuation
        || (0xFF1A..=0xFF20).contains(&cp)
        || (0xFF3B..=0xFF40).contains(&cp)
        || (0xFF5B..=0xFF65).contains(&cp)
}
