//! Sentence-level frequency ranking
//!
//! Scores each sentence by the average document frequency of its tokens and
//! selects the best-scoring sentences as an extractive summary, returned in
//! document order.

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::tokenize;

/// Configuration for sentence selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
    /// Minimum sentence length (in tokens)
    pub min_sentence_tokens: usize,
    /// Maximum sentence length (in tokens)
    pub max_sentence_tokens: usize,
    /// Ignore stopwords when scoring
    pub exclude_stopwords: bool,
    pub stopword_language: String,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            num_sentences: 3,
            min_sentence_tokens: 1,
            max_sentence_tokens: 100,
            exclude_stopwords: false,
            stopword_language: "en".to_string(),
        }
    }
}

/// A scored sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    /// Trimmed sentence text, terminator included
    pub text: String,
    /// Position in the document (0-based)
    pub index: usize,
    /// Number of word tokens, stopwords included
    pub token_count: usize,
    /// Mean document frequency of the sentence's scored tokens
    pub score: f64,
}

/// Selected sentences in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentenceSummary {
    pub sentences: Vec<Sentence>,
}

impl SentenceSummary {
    /// Selected sentences joined by single spaces.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Frequency-scored sentence selector
#[derive(Debug, Clone)]
pub struct SentenceRanker {
    config: SentenceConfig,
    stopwords: Option<StopwordFilter>,
}

impl Default for SentenceRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceRanker {
    pub fn new() -> Self {
        Self::with_config(SentenceConfig::default())
    }

    pub fn with_config(config: SentenceConfig) -> Self {
        let stopwords = config
            .exclude_stopwords
            .then(|| StopwordFilter::new(&config.stopword_language));
        Self { config, stopwords }
    }

    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Use `filter` to drop stopwords when scoring.
    pub fn with_stopwords(mut self, filter: StopwordFilter) -> Self {
        self.config.exclude_stopwords = true;
        self.stopwords = Some(filter);
        self
    }

    pub fn config(&self) -> &SentenceConfig {
        &self.config
    }

    /// Score every sentence of `text`, in document order.
    pub fn rank(&self, text: &str) -> Vec<Sentence> {
        let spans = split_sentences(text);
        let per_sentence: Vec<Vec<String>> = spans.iter().map(|s| tokenize(s)).collect();

        let scored = |tokens: &[String]| -> Vec<String> {
            match &self.stopwords {
                Some(filter) => filter.strip(tokens.to_vec()),
                None => tokens.to_vec(),
            }
        };

        let table =
            FrequencyTable::from_tokens(per_sentence.iter().flat_map(|t| scored(t.as_slice())));

        spans
            .iter()
            .zip(&per_sentence)
            .enumerate()
            .map(|(index, (span, tokens))| {
                let counted = scored(tokens.as_slice());
                let score = if counted.is_empty() {
                    0.0
                } else {
                    let sum: usize = counted.iter().map(|t| table.count(t)).sum();
                    sum as f64 / counted.len() as f64
                };
                Sentence {
                    text: span.to_string(),
                    index,
                    token_count: tokens.len(),
                    score,
                }
            })
            .collect()
    }

    /// Select the top-scoring sentences, returned in document order.
    ///
    /// Equal scores prefer the earlier sentence.
    pub fn summarize(&self, text: &str) -> SentenceSummary {
        if self.config.num_sentences == 0 {
            return SentenceSummary::default();
        }

        let mut candidates: Vec<Sentence> = self
            .rank(text)
            .into_iter()
            .filter(|s| {
                s.token_count > 0
                    && s.token_count >= self.config.min_sentence_tokens
                    && s.token_count <= self.config.max_sentence_tokens
            })
            .collect();

        candidates.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
        candidates.truncate(self.config.num_sentences);
        candidates.sort_by_key(|s| s.index);

        tracing::debug!(selected = candidates.len(), "sentence summary");
        SentenceSummary {
            sentences: candidates,
        }
    }
}

/// Split `text` at `.`, `!`, `?` and line breaks.
///
/// Runs of terminators ("?!", "...") stay with their sentence. Spans are
/// trimmed and empty spans dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let (end, next_start) = match c {
            '\n' => (i, i + 1),
            '.' | '!' | '?' => {
                let mut end = i + c.len_utf8();
                while let Some(&(j, next)) = chars.peek() {
                    if !matches!(next, '.' | '!' | '?') {
                        break;
                    }
                    end = j + next.len_utf8();
                    chars.next();
                }
                (end, end)
            }
            _ => continue,
        };
        push_trimmed(&mut spans, &text[start..end]);
        start = next_start;
    }
    push_trimmed(&mut spans, &text[start..]);
    spans
}

fn push_trimmed<'a>(spans: &mut Vec<&'a str>, span: &'a str) {
    let span = span.trim();
    if !span.is_empty() {
        spans.push(span);
    }
}
