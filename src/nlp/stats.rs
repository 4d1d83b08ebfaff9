//! Text statistics and cleaning
//!
//! Character and stopword counts plus the cleaning passes the analysis
//! report is built from. Words here are whitespace-separated runs with
//! leading and trailing punctuation trimmed, so "Hello," and "hello" match
//! the same stopword entry.

use serde::{Deserialize, Serialize};

use super::stopwords::StopwordFilter;
use super::tokenizer::is_word_char;
use crate::capability::TextStatistics;

const VOWELS: &str = "aeiouAEIOU";

/// Basic counts over a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    /// Length in characters
    pub length: usize,
    pub vowel_count: usize,
    pub consonant_count: usize,
    pub stopword_count: usize,
}

/// Built-in text-statistics utility backed by a [`StopwordFilter`].
#[derive(Debug, Clone, Default)]
pub struct TextStats {
    stopwords: StopwordFilter,
}

impl TextStats {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Statistics using the stopword list for `language`.
    pub fn for_language(language: &str) -> Self {
        Self::new(StopwordFilter::new(language))
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    fn is_stopword_word(&self, word: &str) -> bool {
        let core = trim_word(word);
        !core.is_empty() && self.stopwords.is_stopword(core)
    }
}

impl TextStatistics for TextStats {
    fn word_stats(&self, text: &str) -> WordStats {
        let mut stats = WordStats::default();
        for c in text.chars() {
            stats.length += 1;
            if VOWELS.contains(c) {
                stats.vowel_count += 1;
            } else if c.is_ascii_alphabetic() {
                stats.consonant_count += 1;
            }
        }
        stats.stopword_count = text
            .split_whitespace()
            .filter(|w| self.is_stopword_word(w))
            .count();
        stats
    }

    fn extract_stopwords(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(trim_word)
            .filter(|w| !w.is_empty() && self.stopwords.is_stopword(w))
            .map(str::to_string)
            .collect()
    }

    fn remove_stopwords(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|w| !self.is_stopword_word(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn remove_punctuation(&self, text: &str) -> String {
        text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
    }

    fn remove_special_characters(&self, text: &str) -> String {
        text.chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect()
    }
}

fn trim_word(word: &str) -> &str {
    word.trim_matches(|c: char| !is_word_char(c))
}
