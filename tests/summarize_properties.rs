//! Property-based tests for the frequency summarizer.
//!
//! These check the invariants of `summarize` across generated documents:
//! output tokens come from the input, the result size is bounded, ranking is
//! deterministic and growing the count only appends.

use std::collections::HashSet;

use freqrank::{summarize, tokenize, FrequencySummarizer, FrequencyTable};
use proptest::prelude::*;

/// Documents mixing words, digits, punctuation and whitespace.
fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(vec!["alpha", "Beta", "gamma", "the", "a", "2023", "snake_case"])
                .prop_map(str::to_string),
            prop::string::string_regex(r"[A-Za-z0-9_]{1,6}").unwrap(),
            prop::string::string_regex(r"[ ,.!?;:'\-\n]{1,3}").unwrap(),
        ],
        0..40,
    )
    .prop_map(|parts| parts.join(" "))
}

fn words(summary: &str) -> Vec<&str> {
    summary.split(' ').filter(|w| !w.is_empty()).collect()
}

proptest! {
    #[test]
    fn prop_empty_text_gives_empty_summary(n in 0usize..20) {
        prop_assert_eq!(summarize("", n), "");
    }

    #[test]
    fn prop_zero_count_gives_empty_summary(text in document_strategy()) {
        prop_assert_eq!(summarize(&text, 0), "");
    }

    #[test]
    fn prop_tokens_come_from_text(text in document_strategy(), n in 0usize..20) {
        let distinct: HashSet<String> = tokenize(&text).into_iter().collect();
        let summary = summarize(&text, n);
        for word in words(&summary) {
            prop_assert!(distinct.contains(word), "{} not in input", word);
        }
    }

    #[test]
    fn prop_size_is_bounded(text in document_strategy(), n in 0usize..20) {
        let distinct: HashSet<String> = tokenize(&text).into_iter().collect();
        let summary = summarize(&text, n);
        let selected = words(&summary);

        prop_assert_eq!(selected.len(), n.min(distinct.len()));
        let unique: HashSet<&str> = selected.iter().copied().collect();
        prop_assert_eq!(unique.len(), selected.len());
    }

    #[test]
    fn prop_deterministic(text in document_strategy(), n in 0usize..20) {
        prop_assert_eq!(summarize(&text, n), summarize(&text, n));
    }

    #[test]
    fn prop_monotonic_in_count(text in document_strategy(), n in 0usize..20) {
        let smaller = summarize(&text, n);
        let larger = summarize(&text, n + 1);
        let smaller_words = words(&smaller);
        let larger_words = words(&larger);
        prop_assert!(larger_words.starts_with(&smaller_words));
    }

    #[test]
    fn prop_ranked_by_count(text in document_strategy()) {
        let table = FrequencyTable::from_text(&text);
        let summary = summarize(&text, table.len());
        let counts: Vec<usize> = words(&summary).iter().map(|w| table.count(w)).collect();
        prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn prop_counts_sum_to_token_total(text in document_strategy()) {
        let table = FrequencyTable::from_text(&text);
        prop_assert_eq!(table.total(), tokenize(&text).len());
        prop_assert_eq!(table.iter().map(|e| e.count).sum::<usize>(), table.total());
    }

    #[test]
    fn prop_batch_matches_sequential(texts in prop::collection::vec(document_strategy(), 0..8)) {
        let summarizer = FrequencySummarizer::new();
        let sequential: Vec<String> = texts.iter().map(|t| summarizer.summarize(t)).collect();
        prop_assert_eq!(summarizer.summarize_batch(&texts), sequential);
    }
}
