//! Frequency-based extractive summarization
//!
//! Counts every token of a document, ranks the distinct tokens by count and
//! returns the most frequent ones as the summary.
//!
//! # Ordering
//!
//! [`FrequencyTable`] enumerates tokens in order of first occurrence in the
//! source text. [`RankedList`] is produced by a stable sort on count alone,
//! so tokens with equal counts stay in first-occurrence order: the summary of
//! `"b a"` is `"b a"`, never `"a b"`.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::tokenize;

/// Default number of tokens in a summary.
pub const DEFAULT_SUMMARY_COUNT: usize = 3;

/// A distinct token and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

/// Token -> occurrence count, in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<TokenCount>,
    /// Token -> position in `entries`
    index: FxHashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a token sequence in one pass.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    /// Tokenize and count `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    /// Record one occurrence of `token`. Empty tokens are ignored.
    pub fn add(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.total += 1;
        match self.index.get(token) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push(TokenCount {
                    token: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Occurrences of `token` (0 when absent).
    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&pos| self.entries[pos].count)
            .unwrap_or(0)
    }

    /// Total number of tokens counted; equals the sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenCount> {
        self.entries.iter()
    }

    /// Entries sorted by descending count, ties in first-occurrence order.
    pub fn ranked(&self) -> RankedList {
        let mut entries = self.entries.clone();
        // sort_by is stable
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        RankedList { entries }
    }
}

/// Distinct tokens ordered from most to least frequent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedList {
    entries: Vec<TokenCount>,
}

impl RankedList {
    /// The first `n` entries, or all of them when there are fewer.
    pub fn top(&self, n: usize) -> &[TokenCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// The first `n` tokens joined by single spaces.
    pub fn join(&self, n: usize) -> String {
        self.top(n)
            .iter()
            .map(|e| e.token.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Configuration for [`FrequencySummarizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of tokens in the summary
    pub count: usize,
    /// Drop stopwords before counting
    pub exclude_stopwords: bool,
    /// Stopword list used when `exclude_stopwords` is set
    pub stopword_language: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SUMMARY_COUNT,
            exclude_stopwords: false,
            stopword_language: "en".to_string(),
        }
    }
}

/// Picks the most frequent tokens of a document.
#[derive(Debug, Clone)]
pub struct FrequencySummarizer {
    count: usize,
    stopwords: Option<StopwordFilter>,
}

impl Default for FrequencySummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencySummarizer {
    /// Summarizer returning the top three tokens, stopwords included.
    pub fn new() -> Self {
        Self {
            count: DEFAULT_SUMMARY_COUNT,
            stopwords: None,
        }
    }

    pub fn with_config(config: &SummarizerConfig) -> Self {
        let summarizer = Self::new().with_count(config.count);
        if config.exclude_stopwords {
            summarizer.with_stopwords(StopwordFilter::new(&config.stopword_language))
        } else {
            summarizer
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Exclude tokens in `filter` from counting.
    pub fn with_stopwords(mut self, filter: StopwordFilter) -> Self {
        self.stopwords = Some(filter);
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Build the frequency table this summarizer ranks for `text`.
    pub fn table(&self, text: &str) -> FrequencyTable {
        let tokens = tokenize(text);
        match &self.stopwords {
            Some(filter) => FrequencyTable::from_tokens(filter.strip(tokens)),
            None => FrequencyTable::from_tokens(tokens),
        }
    }

    /// Summarize `text` as its most frequent tokens, highest count first.
    pub fn summarize(&self, text: &str) -> String {
        if self.count == 0 {
            return String::new();
        }
        let table = self.table(text);
        let summary = table.ranked().join(self.count);

        tracing::debug!(
            tokens = table.total(),
            distinct = table.len(),
            count = self.count,
            "frequency summary"
        );
        summary
    }

    /// Summarize many documents in parallel. Output order matches input.
    pub fn summarize_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref()))
            .collect()
    }
}

/// Summarize `text` as its `count` most frequent tokens joined by spaces.
///
/// Ties keep first-occurrence order. Empty text or `count == 0` gives an
/// empty string.
pub fn summarize(text: &str, count: usize) -> String {
    FrequencySummarizer::new().with_count(count).summarize(text)
}
