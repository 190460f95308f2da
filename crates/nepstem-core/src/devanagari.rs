// Devanagari character classification and word normalization.

/// NUKTA (U+093C), the combining dot written under a consonant to mark
/// borrowed sounds. Nepali spelling uses it inconsistently, so it is
/// stripped before stemming.
pub const NUKTA: char = '\u{093C}';

/// VIRAMA (U+094D), the sign that suppresses the inherent vowel and
/// joins consonants into conjunct clusters such as त्त.
pub const VIRAMA: char = '\u{094D}';

/// Check whether a character belongs to the Devanagari block
/// (U+0900..=U+097F).
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Check whether a character is a Devanagari combining vowel sign
/// (matra, U+093E..=U+094C) as opposed to an independent letter.
pub fn is_vowel_sign(c: char) -> bool {
    ('\u{093E}'..='\u{094C}').contains(&c)
}

/// Normalize a word for stemming: trim surrounding whitespace and
/// remove every nukta. Idempotent; lossy only with respect to the
/// nukta.
pub fn normalize(word: &str) -> String {
    word.trim().chars().filter(|&c| c != NUKTA).collect()
}
