//! # freqrank
//!
//! Frequency-based extractive summarization with the text statistics and
//! collaborator plumbing of a small NLP workbench.
//!
//! ## Quick start
//!
//! ```rust
//! use freqrank::summarize;
//!
//! assert_eq!(summarize("a a a b b c", 2), "a b");
//! assert_eq!(summarize("Hello, hello! World.", 2), "hello world");
//! ```
//!
//! Ties are broken by first occurrence in the text, so `summarize("b a", 2)`
//! is `"b a"`.
//!
//! ## Modules
//!
//! - [`nlp`] - tokenization, stopword lists, text statistics
//! - [`summarizer`] - token and sentence frequency ranking
//! - [`capability`] - traits for external models (lemmatizer, sentiment,
//!   translation, word cloud)
//! - [`workbench`] - caller-owned handle running the analysis actions
//! - [`config`] - JSON configuration

pub mod capability;
pub mod config;
pub mod error;
pub mod nlp;
pub mod summarizer;
pub mod workbench;

pub use capability::{
    Analyzer, BoxError, Capability, RenderedImage, Sentiment, SentimentModel, TargetLanguage,
    TextStatistics, TokenLemma, Translator, WordCloudRenderer,
};
pub use config::Config;
pub use error::{Error, Result};
pub use nlp::stats::{TextStats, WordStats};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::tokenize;
pub use summarizer::frequency::{
    summarize, FrequencySummarizer, FrequencyTable, RankedList, SummarizerConfig, TokenCount,
};
pub use summarizer::sentences::{Sentence, SentenceConfig, SentenceRanker, SentenceSummary};
pub use workbench::{AnalysisReport, Workbench, WorkbenchBuilder};
