//! Stopword lists
//!
//! Wraps the `stop-words` crate behind a lowercase hash set, with built-in
//! lists for Chinese and Japanese and support for caller-supplied words.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of high-frequency, low-information words for one language.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Normalized (lowercase) stopwords
    words: FxHashSet<String>,
    /// Language code the list was loaded for, or `"custom"`
    language: String,
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Load the stopword list for a language code or English language name.
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        let (code, words) = load(language);
        Self {
            words,
            language: code.to_string(),
            case_sensitive: false,
        }
    }

    /// A filter that matches nothing.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
            language: "custom".to_string(),
            case_sensitive: false,
        }
    }

    /// Build a filter from an explicit word list.
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    pub fn remove_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check whether `word` is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_lowercase())
        }
    }

    /// Drop stopwords from an already-tokenized sequence, keeping order.
    pub fn strip<S: AsRef<str>>(&self, tokens: Vec<S>) -> Vec<S> {
        if self.words.is_empty() {
            return tokens;
        }
        tokens
            .into_iter()
            .filter(|t| !self.is_stopword(t.as_ref()))
            .collect()
    }

    /// Language code this filter was loaded for.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn load(language: &str) -> (&'static str, FxHashSet<String>) {
    let (code, lang) = match language.to_lowercase().as_str() {
        "en" | "english" => ("en", LANGUAGE::English),
        "de" | "german" => ("de", LANGUAGE::German),
        "fr" | "french" => ("fr", LANGUAGE::French),
        "es" | "spanish" => ("es", LANGUAGE::Spanish),
        "it" | "italian" => ("it", LANGUAGE::Italian),
        "pt" | "portuguese" => ("pt", LANGUAGE::Portuguese),
        "nl" | "dutch" => ("nl", LANGUAGE::Dutch),
        "ru" | "russian" => ("ru", LANGUAGE::Russian),
        "sv" | "swedish" => ("sv", LANGUAGE::Swedish),
        "no" | "norwegian" => ("no", LANGUAGE::Norwegian),
        "da" | "danish" => ("da", LANGUAGE::Danish),
        "fi" | "finnish" => ("fi", LANGUAGE::Finnish),
        "hu" | "hungarian" => ("hu", LANGUAGE::Hungarian),
        "tr" | "turkish" => ("tr", LANGUAGE::Turkish),
        "pl" | "polish" => ("pl", LANGUAGE::Polish),
        "ar" | "arabic" => ("ar", LANGUAGE::Arabic),
        "zh" | "zh-cn" | "chinese" => return ("zh", to_set(CHINESE)),
        "ja" | "japanese" => return ("ja", to_set(JAPANESE)),
        other => {
            tracing::warn!(language = other, "no stopword list, using English");
            ("en", LANGUAGE::English)
        }
    };
    (code, get(lang).iter().map(|s| s.to_string()).collect())
}

fn to_set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|s| s.to_string()).collect()
}

// The stop-words crate has no usable lists for these two.
const CHINESE: &[&str] = &[
    "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及", "这", "那",
    "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对", "将", "于", "能", "会",
    "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
];

const JAPANESE: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる", "も",
    "する", "から", "な", "こと", "として", "い", "や", "など", "なっ", "ない", "この", "ため",
    "その", "あっ", "よう", "また", "もの", "という", "あり", "まで", "られ", "なる", "へ", "か",
    "だ", "これ", "によって", "により", "おり",
];
