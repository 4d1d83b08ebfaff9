//! Configuration for freqrank.
//!
//! Every section has defaults, so an empty JSON object is a valid config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::summarizer::frequency::SummarizerConfig;
use crate::summarizer::sentences::SentenceConfig;

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Token summary settings.
    pub summary: SummarizerConfig,

    /// Sentence summary settings.
    pub sentences: SentenceConfig,

    /// Stopword list used for text statistics.
    pub stopwords: StopwordConfig,

    /// Translation input rules.
    pub translation: TranslationConfig,
}

/// Stopword list selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwordConfig {
    /// Language code or English name, e.g. `en` or `german`.
    /// Default: `en`.
    pub language: String,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
        }
    }
}

/// Translation input rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Minimum input length in characters.
    /// Default: 3.
    pub min_chars: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self { min_chars: 3 }
    }
}

impl Config {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let json = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_json_str(&json)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        let sentences = &self.sentences;
        if sentences.max_sentence_tokens == 0 {
            return Err(Error::Config(
                "sentences.max_sentence_tokens must be at least 1".into(),
            ));
        }
        if sentences.min_sentence_tokens > sentences.max_sentence_tokens {
            return Err(Error::Config(format!(
                "sentences.min_sentence_tokens ({}) exceeds max_sentence_tokens ({})",
                sentences.min_sentence_tokens, sentences.max_sentence_tokens
            )));
        }

        for (field, language) in [
            ("summary.stopword_language", &self.summary.stopword_language),
            ("sentences.stopword_language", &sentences.stopword_language),
            ("stopwords.language", &self.stopwords.language),
        ] {
            if language.trim().is_empty() {
                return Err(Error::Config(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.summary.count, 3);
        assert_eq!(config.translation.min_chars, 3);
        assert_eq!(config.stopwords.language, "en");
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_json_str(
            r#"{"summary": {"count": 5}, "sentences": {"num_sentences": 1}}"#,
        )
        .unwrap();
        assert_eq!(config.summary.count, 5);
        assert!(!config.summary.exclude_stopwords);
        assert_eq!(config.sentences.num_sentences, 1);
        assert_eq!(config.sentences.max_sentence_tokens, 100);
    }

    #[test]
    fn test_invalid_sentence_bounds() {
        let err = Config::from_json_str(
            r#"{"sentences": {"min_sentence_tokens": 10, "max_sentence_tokens": 5}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_language_rejected() {
        let err = Config::from_json_str(r#"{"stopwords": {"language": " "}}"#).unwrap_err();
        assert!(err.to_string().contains("stopwords.language"));
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"translation": {{"min_chars": 10}}}}"#).unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.translation.min_chars, 10);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
