//! Integration tests for the workbench actions, using mock collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use freqrank::{
    Analyzer, BoxError, Capability, Config, Error, RenderedImage, Sentiment, SentimentModel,
    StopwordFilter, TargetLanguage, TextStats, TokenLemma, Translator, WordCloudRenderer,
    Workbench,
};

/// Lemmatizer that strips a trailing "s" and records what it was given.
#[derive(Default, Clone)]
struct MockAnalyzer {
    seen: Arc<Mutex<Vec<String>>>,
}

impl Analyzer for MockAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<TokenLemma>, BoxError> {
        self.seen.lock().unwrap().push(text.to_string());
        Ok(text
            .split_whitespace()
            .map(|t| TokenLemma::new(t, t.trim_end_matches('s')))
            .collect())
    }
}

#[derive(Default, Clone)]
struct MockSentiment {
    calls: Arc<AtomicUsize>,
}

impl SentimentModel for MockSentiment {
    fn sentiment(&self, text: &str) -> Result<Sentiment, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let polarity = if text.contains("good") { 0.7 } else { -0.2 };
        Ok(Sentiment {
            polarity,
            subjectivity: 0.6,
        })
    }
}

#[derive(Default, Clone)]
struct MockTranslator {
    calls: Arc<AtomicUsize>,
}

impl Translator for MockTranslator {
    fn translate(
        &self,
        text: &str,
        source: &str,
        target: TargetLanguage,
    ) -> Result<String, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{source}:{}:{text}", target.code()))
    }
}

struct FailingTranslator;

impl Translator for FailingTranslator {
    fn translate(&self, _: &str, _: &str, _: TargetLanguage) -> Result<String, BoxError> {
        Err("service unavailable".into())
    }
}

struct MockCloud;

impl WordCloudRenderer for MockCloud {
    fn render(&self, text: &str) -> Result<RenderedImage, BoxError> {
        Ok(RenderedImage {
            media_type: "image/png".to_string(),
            width: 400,
            height: 200,
            bytes: text.as_bytes().to_vec(),
        })
    }
}

const TEXT: &str = "The cats chased the mice. The mice hid from the cats!";

#[test]
fn test_analyze_full_report() {
    let analyzer = MockAnalyzer::default();
    let bench = Workbench::builder()
        .analyzer(analyzer.clone())
        .text_statistics(TextStats::new(StopwordFilter::from_list(["the", "from"])))
        .word_cloud_renderer(MockCloud)
        .build()
        .unwrap();

    let report = bench.analyze(TEXT).unwrap();

    assert_eq!(report.stats.length, TEXT.chars().count());
    assert_eq!(report.stats.stopword_count, 5);
    assert_eq!(report.stopwords, vec!["The", "the", "The", "from", "the"]);
    assert_eq!(report.stopword_free_text, "cats chased mice. mice hid cats!");
    assert_eq!(report.summary, "the cats mice");
    assert_eq!(report.key_sentences.len(), 2);

    // Analyzer sees the text with stopwords, punctuation and specials removed.
    assert_eq!(
        *analyzer.seen.lock().unwrap(),
        vec!["cats chased mice mice hid cats".to_string()]
    );
    assert_eq!(report.tokens_and_lemmas[0], TokenLemma::new("cats", "cat"));

    let cloud = report.word_cloud.unwrap();
    assert_eq!(cloud.media_type, "image/png");
    assert_eq!(cloud.bytes, TEXT.as_bytes());
}

#[test]
fn test_analyze_without_word_cloud() {
    let bench = Workbench::builder()
        .analyzer(MockAnalyzer::default())
        .build()
        .unwrap();
    let report = bench.analyze("words words here").unwrap();
    assert!(report.word_cloud.is_none());
    assert_eq!(report.summary, "words here");
}

#[test]
fn test_analyze_rejects_blank_without_calling_analyzer() {
    let analyzer = MockAnalyzer::default();
    let bench = Workbench::builder()
        .analyzer(analyzer.clone())
        .build()
        .unwrap();

    for text in ["", "   ", "\n\t"] {
        let err = bench.analyze(text).unwrap_err();
        assert!(err.is_validation());
    }
    assert!(analyzer.seen.lock().unwrap().is_empty());
}

#[test]
fn test_sentiment() {
    let model = MockSentiment::default();
    let bench = Workbench::builder()
        .sentiment_model(model.clone())
        .build()
        .unwrap();

    let score = bench.sentiment("a good day").unwrap();
    assert_eq!(score.polarity, 0.7);
    assert_eq!(score.subjectivity, 0.6);

    assert!(matches!(bench.sentiment(" "), Err(Error::EmptyInput(_))));
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_translate_validation_and_call() {
    let translator = MockTranslator::default();
    let bench = Workbench::builder()
        .translator(translator.clone())
        .build()
        .unwrap();

    let err = bench.translate("hi", TargetLanguage::German).unwrap_err();
    assert!(matches!(err, Error::InputTooShort { min: 3, actual: 2 }));
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);

    let out = bench.translate("hello", TargetLanguage::Chinese).unwrap();
    assert_eq!(out, "auto:zh-cn:hello");
    assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_translate_min_chars_from_config() {
    let config = Config::from_json_str(r#"{"translation": {"min_chars": 10}}"#).unwrap();
    let bench = Workbench::builder()
        .config(config)
        .translator(MockTranslator::default())
        .build()
        .unwrap();

    assert!(bench.translate("too short", TargetLanguage::French).is_err());
    assert!(bench.translate("long enough", TargetLanguage::French).is_ok());
}

#[test]
fn test_collaborator_failure_propagates() {
    let bench = Workbench::builder()
        .translator(FailingTranslator)
        .build()
        .unwrap();

    match bench.translate("hello", TargetLanguage::Spanish) {
        Err(Error::Collaborator { capability, source }) => {
            assert_eq!(capability, Capability::Translator);
            assert_eq!(source.to_string(), "service unavailable");
        }
        other => panic!("expected collaborator error, got {other:?}"),
    }
}

#[test]
fn test_stopword_excluding_summary_from_config() {
    let config =
        Config::from_json_str(r#"{"summary": {"count": 2, "exclude_stopwords": true}}"#).unwrap();
    let bench = Workbench::builder()
        .config(config)
        .analyzer(MockAnalyzer::default())
        .build()
        .unwrap();

    let report = bench.analyze(TEXT).unwrap();
    assert_eq!(report.summary, "cats mice");
}

#[test]
fn test_workbench_is_shareable_across_threads() {
    let bench = Arc::new(
        Workbench::builder()
            .sentiment_model(MockSentiment::default())
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let bench = Arc::clone(&bench);
            std::thread::spawn(move || bench.sentiment("good").unwrap().polarity)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 0.7);
    }
}
