//! Capability traits for external collaborators.
//!
//! Lemmatization, sentiment scoring, machine translation and word-cloud
//! rendering are provided by outside models and services. Each is reached
//! through one small synchronous trait so implementations can be swapped or
//! mocked without touching the rest of the crate.
//!
//! # Contract
//!
//! - Implementations are `Send + Sync`; a loaded model is shared read-only
//!   by every caller of a [`crate::Workbench`].
//! - Failures are returned as [`BoxError`] and surfaced unchanged inside
//!   [`crate::Error::Collaborator`]. Nothing retries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::nlp::stats::WordStats;

/// Opaque error returned by a collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Names each collaborator, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Analyzer,
    TextStatistics,
    SentimentModel,
    Translator,
    WordCloudRenderer,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analyzer => "analyzer",
            Self::TextStatistics => "text statistics",
            Self::SentimentModel => "sentiment model",
            Self::Translator => "translator",
            Self::WordCloudRenderer => "word cloud renderer",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Value types ────────────────────────────────────────────────────────────

/// One token and its lemma, as produced by an [`Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLemma {
    pub token: String,
    pub lemma: String,
}

impl TokenLemma {
    pub fn new(token: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            lemma: lemma.into(),
        }
    }
}

/// Sentiment scores. Both values are passed through from the model as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// A rasterized image returned by a [`WordCloudRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedImage {
    /// MIME type of `bytes`, e.g. `image/png`
    pub media_type: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Source language hint passed to translators.
pub const AUTO_DETECT: &str = "auto";

/// Supported translation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[serde(rename = "de")]
    German,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "zh-cn")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 5] = [
        Self::German,
        Self::Spanish,
        Self::French,
        Self::Chinese,
        Self::Japanese,
    ];

    /// Language code understood by translation services.
    pub fn code(&self) -> &'static str {
        match self {
            Self::German => "de",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::Chinese => "zh-cn",
            Self::Japanese => "ja",
        }
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::German => "German",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TargetLanguage {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "de" | "german" => Ok(Self::German),
            "es" | "spanish" => Ok(Self::Spanish),
            "fr" | "french" => Ok(Self::French),
            "zh-cn" | "zh" | "chinese" => Ok(Self::Chinese),
            "ja" | "japanese" => Ok(Self::Japanese),
            _ => Err(Error::UnsupportedLanguage(value.to_string())),
        }
    }
}

// ─── Traits ─────────────────────────────────────────────────────────────────

/// Tokenizer/lemmatizer model.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Vec<TokenLemma>, BoxError>;
}

/// Text-statistics utility. [`crate::TextStats`] is the built-in
/// implementation.
pub trait TextStatistics: Send + Sync {
    fn word_stats(&self, text: &str) -> WordStats;

    /// Stopwords found in `text`, in order of appearance.
    fn extract_stopwords(&self, text: &str) -> Vec<String>;

    fn remove_stopwords(&self, text: &str) -> String;

    fn remove_punctuation(&self, text: &str) -> String;

    fn remove_special_characters(&self, text: &str) -> String;
}

/// Sentiment model.
pub trait SentimentModel: Send + Sync {
    fn sentiment(&self, text: &str) -> Result<Sentiment, BoxError>;
}

/// Machine-translation service.
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` (a language code or [`AUTO_DETECT`])
    /// into `target`.
    fn translate(&self, text: &str, source: &str, target: TargetLanguage)
        -> Result<String, BoxError>;
}

/// Word-cloud renderer.
pub trait WordCloudRenderer: Send + Sync {
    fn render(&self, text: &str) -> Result<RenderedImage, BoxError>;
}
