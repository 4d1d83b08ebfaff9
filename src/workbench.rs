//! Workbench: the caller-owned handle that runs the analysis actions.
//!
//! A [`Workbench`] bundles the loaded collaborators (analyzer, sentiment
//! model, translator, word-cloud renderer, text statistics) with the
//! configuration. Build it once at startup with [`WorkbenchBuilder`]; it is
//! read-only afterwards and can be shared across threads.
//!
//! # Actions
//!
//! | Action | Validation | Collaborators |
//! |--------|------------|---------------|
//! | [`Workbench::analyze`] | non-blank text | statistics, analyzer, word cloud (optional) |
//! | [`Workbench::translate`] | at least `translation.min_chars` characters | translator |
//! | [`Workbench::sentiment`] | non-blank text | sentiment model |
//!
//! Validation failures return before any collaborator is called.

use serde::Serialize;

use crate::capability::{
    Analyzer, Capability, RenderedImage, Sentiment, SentimentModel, TargetLanguage,
    TextStatistics, TokenLemma, Translator, WordCloudRenderer, AUTO_DETECT,
};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::nlp::stats::{TextStats, WordStats};
use crate::summarizer::frequency::FrequencySummarizer;
use crate::summarizer::sentences::SentenceRanker;

/// Everything the analysis action produces for one text.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub stats: WordStats,
    /// Stopwords in order of appearance
    pub stopwords: Vec<String>,
    pub stopword_free_text: String,
    /// Tokens and lemmas of the cleaned text
    pub tokens_and_lemmas: Vec<TokenLemma>,
    /// Most frequent tokens
    pub summary: String,
    /// Highest-scoring sentences, in document order
    pub key_sentences: Vec<String>,
    /// Absent when no renderer is configured
    pub word_cloud: Option<RenderedImage>,
}

/// Loaded collaborators plus configuration.
pub struct Workbench {
    config: Config,
    summarizer: FrequencySummarizer,
    ranker: SentenceRanker,
    statistics: Box<dyn TextStatistics>,
    analyzer: Option<Box<dyn Analyzer>>,
    sentiment: Option<Box<dyn SentimentModel>>,
    translator: Option<Box<dyn Translator>>,
    word_cloud: Option<Box<dyn WordCloudRenderer>>,
}

impl std::fmt::Debug for Workbench {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbench")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.is_some())
            .field("sentiment", &self.sentiment.is_some())
            .field("translator", &self.translator.is_some())
            .field("word_cloud", &self.word_cloud.is_some())
            .finish()
    }
}

impl Workbench {
    pub fn builder() -> WorkbenchBuilder {
        WorkbenchBuilder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Token summary using the configured count and stopword setting.
    pub fn summarize(&self, text: &str) -> String {
        self.summarizer.summarize(text)
    }

    /// Run the full analysis on `text`.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        require_text(text, "analysis")?;
        let analyzer = self
            .analyzer
            .as_deref()
            .ok_or(Error::MissingCapability(Capability::Analyzer))?;

        let stats = self.statistics.word_stats(text);
        let stopwords = self.statistics.extract_stopwords(text);
        let stopword_free_text = self.statistics.remove_stopwords(text);

        let without_punctuation = self.statistics.remove_punctuation(&stopword_free_text);
        let cleaned = self
            .statistics
            .remove_special_characters(&without_punctuation);
        let tokens_and_lemmas = analyzer
            .analyze(&cleaned)
            .map_err(|e| Error::collaborator(Capability::Analyzer, e))?;

        let word_cloud = match &self.word_cloud {
            Some(renderer) => Some(
                renderer
                    .render(text)
                    .map_err(|e| Error::collaborator(Capability::WordCloudRenderer, e))?,
            ),
            None => None,
        };

        let key_sentences = self
            .ranker
            .summarize(text)
            .sentences
            .into_iter()
            .map(|s| s.text)
            .collect();

        tracing::info!(
            chars = stats.length,
            tokens = tokens_and_lemmas.len(),
            "analysis complete"
        );

        Ok(AnalysisReport {
            stats,
            stopwords,
            stopword_free_text,
            tokens_and_lemmas,
            summary: self.summarizer.summarize(text),
            key_sentences,
            word_cloud,
        })
    }

    /// Translate `text` into `target`, auto-detecting the source language.
    pub fn translate(&self, text: &str, target: TargetLanguage) -> Result<String> {
        let min = self.config.translation.min_chars;
        let actual = text.chars().count();
        if actual < min {
            tracing::warn!(min, actual, "translation input too short");
            return Err(Error::InputTooShort { min, actual });
        }
        let translator = self
            .translator
            .as_deref()
            .ok_or(Error::MissingCapability(Capability::Translator))?;

        tracing::info!(language = target.code(), "translating");
        translator
            .translate(text, AUTO_DETECT, target)
            .map_err(|e| Error::collaborator(Capability::Translator, e))
    }

    /// Score the sentiment of `text`.
    pub fn sentiment(&self, text: &str) -> Result<Sentiment> {
        require_text(text, "sentiment")?;
        let model = self
            .sentiment
            .as_deref()
            .ok_or(Error::MissingCapability(Capability::SentimentModel))?;

        model
            .sentiment(text)
            .map_err(|e| Error::collaborator(Capability::SentimentModel, e))
    }
}

fn require_text(text: &str, action: &'static str) -> Result<()> {
    if text.trim().is_empty() {
        tracing::warn!(action, "empty input rejected");
        return Err(Error::EmptyInput(action));
    }
    Ok(())
}

/// Builder for [`Workbench`].
#[derive(Default)]
pub struct WorkbenchBuilder {
    config: Config,
    statistics: Option<Box<dyn TextStatistics>>,
    analyzer: Option<Box<dyn Analyzer>>,
    sentiment: Option<Box<dyn SentimentModel>>,
    translator: Option<Box<dyn Translator>>,
    word_cloud: Option<Box<dyn WordCloudRenderer>>,
}

impl WorkbenchBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the built-in [`TextStats`].
    pub fn text_statistics(mut self, statistics: impl TextStatistics + 'static) -> Self {
        self.statistics = Some(Box::new(statistics));
        self
    }

    pub fn analyzer(mut self, analyzer: impl Analyzer + 'static) -> Self {
        self.analyzer = Some(Box::new(analyzer));
        self
    }

    pub fn sentiment_model(mut self, model: impl SentimentModel + 'static) -> Self {
        self.sentiment = Some(Box::new(model));
        self
    }

    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Box::new(translator));
        self
    }

    pub fn word_cloud_renderer(mut self, renderer: impl WordCloudRenderer + 'static) -> Self {
        self.word_cloud = Some(Box::new(renderer));
        self
    }

    /// Validate the configuration and assemble the workbench.
    pub fn build(self) -> Result<Workbench> {
        self.config.validate()?;

        let statistics = match self.statistics {
            Some(statistics) => statistics,
            None => Box::new(TextStats::for_language(&self.config.stopwords.language)),
        };

        Ok(Workbench {
            summarizer: FrequencySummarizer::with_config(&self.config.summary),
            ranker: SentenceRanker::with_config(self.config.sentences.clone()),
            config: self.config,
            statistics,
            analyzer: self.analyzer,
            sentiment: self.sentiment,
            translator: self.translator,
            word_cloud: self.word_cloud,
        })
    }
}
