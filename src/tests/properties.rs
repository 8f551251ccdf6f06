use crate::analyzer::LogAnalyzer;
use crate::frequency::FrequencyIndex;
use crate::matcher;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Brute-force overlapping occurrence count.
fn naive_count(text: &[u8], pattern: &[u8]) -> usize {
    if pattern.is_empty() || pattern.len() > text.len() {
        return 0;
    }
    text.windows(pattern.len()).filter(|w| *w == pattern).count()
}

proptest! {
    // Small alphabets force many partial matches and fallbacks.
    #[test]
    fn kmp_count_matches_naive(text in "[abAB]{0,40}", pattern in "[abAB]{0,6}") {
        prop_assert_eq!(
            matcher::count(&text, &pattern),
            naive_count(text.as_bytes(), pattern.as_bytes())
        );
    }

    #[test]
    fn kmp_ignore_case_matches_naive(text in "[abAB ]{0,40}", pattern in "[abAB]{1,5}") {
        let lower_text = text.to_ascii_lowercase();
        let lower_pattern = pattern.to_ascii_lowercase();
        prop_assert_eq!(
            matcher::count_ignore_case(&text, &pattern),
            naive_count(lower_text.as_bytes(), lower_pattern.as_bytes())
        );
    }

    #[test]
    fn positions_are_real_matches(text in "[ab]{0,30}", pattern in "[ab]{1,4}") {
        let found = matcher::positions(&text, &pattern);
        prop_assert_eq!(found.len(), matcher::count(&text, &pattern));
        for start in found {
            prop_assert_eq!(&text[start..start + pattern.len()], pattern.as_str());
        }
    }

    #[test]
    fn frequency_index_agrees_with_hashmap(keys in prop::collection::vec("[a-e]{0,3}", 0..60)) {
        let mut index = FrequencyIndex::new();
        let mut expected: HashMap<&str, usize> = HashMap::new();
        for key in &keys {
            index.insert(key);
            *expected.entry(key.as_str()).or_default() += 1;
        }

        prop_assert_eq!(index.total_distinct_keys(), expected.len());
        for (key, count) in &expected {
            prop_assert_eq!(index.count_of(key), *count);
        }
        prop_assert_eq!(index.all_entries().count(), expected.len());
    }

    #[test]
    fn analyzer_counts_follow_insertions(
        logs in prop::collection::vec(
            (prop::sample::select(vec!["INFO", "ERROR", "error", "Error", "DEBUG"]), "[xyz]{1,2}"),
            0..40,
        )
    ) {
        let mut analyzer = LogAnalyzer::new();
        let mut distinct_errors = HashSet::new();
        for (level, message) in &logs {
            analyzer.add_log("t", level, message);
            if *level == "ERROR" || *level == "error" {
                distinct_errors.insert(message.clone());
            }
        }

        prop_assert_eq!(analyzer.total_logs(), logs.len());
        prop_assert_eq!(analyzer.error_count(), distinct_errors.len());

        analyzer.clear_all();
        prop_assert_eq!(analyzer.total_logs(), 0);
        prop_assert_eq!(analyzer.error_count(), 0);
    }
}
