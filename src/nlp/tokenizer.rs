//! Word tokenization
//!
//! Documents are lowercased and every character that is not a letter, digit
//! or underscore acts as a separator. The result is a flat token sequence
//! with no sentence or offset information; contractions and hyphenated
//! words are split ("don't" becomes "don" and "t").

/// Returns `true` for characters that can appear inside a token.
///
/// Letters and digits are Unicode-aware, so "café" and "٣" are word
/// characters while punctuation, symbols and whitespace are not.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercase `text` and replace every non-word character with a space.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect()
}

/// Split `text` into lowercased word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
