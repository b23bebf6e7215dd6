//! Invariants 1 and 2: every indexed substring is found, and every hit
//! reported by `search` really does start with the query.

use inverdex::{IdentityFold, Limit, SuffixIndex};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{1,8}").unwrap()
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..12)
}

proptest! {
    #[test]
    fn every_indexed_substring_is_found(words in corpus_strategy()) {
        let index = SuffixIndex::build(
            words.iter().cloned().map(|w| (w, ())).collect(),
            IdentityFold,
        );

        for word in &words {
            if word.is_empty() {
                continue;
            }
            let bytes = word.as_bytes();
            for start in 0..bytes.len() {
                for end in (start + 1)..=bytes.len() {
                    let (lo, hi) = index.search(&bytes[start..end]);
                    prop_assert!(hi > lo, "substring {:?} of {:?} should be found", &bytes[start..end], word);
                }
            }
        }
    }

    #[test]
    fn search_results_all_start_with_the_query(words in corpus_strategy(), query in word_strategy()) {
        let index = SuffixIndex::build(
            words.into_iter().map(|w| (w, ())).collect(),
            IdentityFold,
        );

        let hits = index.query(&query, Limit::Unbounded);
        for (display, _) in hits {
            prop_assert!(display.contains(query.as_str()));
        }
    }
}
