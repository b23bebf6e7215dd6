//! Invariant 7: `sorted_error_correcting_query` only consults `mutate` on
//! a total miss, while `error_correcting_query` consults it whenever the
//! exact match falls short of the limit.
//!
//! Both are checked indirectly through a counting mutator, since the
//! count of invocations is the only externally observable trace of
//! whether the fallback fired.

use inverdex::{Alphabet, IdentityFold, Levenshtein1, Limit, Mutate, SuffixIndex};
use proptest::prelude::*;
use std::cell::Cell;

struct CountingMutator<'a> {
    calls: &'a Cell<u32>,
    inner: Levenshtein1,
}

impl<'a> Mutate for CountingMutator<'a> {
    fn mutate(&self, word: &[u8]) -> Vec<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        self.inner.mutate(word)
    }
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,8}").unwrap()
}

proptest! {
    #[test]
    fn scored_fallback_fires_only_on_total_miss(
        words in prop::collection::vec(word_strategy(), 1..8),
        query in word_strategy(),
    ) {
        let index = SuffixIndex::build(
            words.into_iter().map(|w| (w, ())).collect(),
            IdentityFold,
        );
        let scorer = |_: &str, _: &(), _: usize, _: usize| 1.0;
        let calls = Cell::new(0);
        let mutator = CountingMutator {
            calls: &calls,
            inner: Levenshtein1::new(Alphabet::LowercaseLetters),
        };

        let exact_hit = !index.query(&query, Limit::Unbounded).is_empty();
        index.sorted_error_correcting_query(&query, Limit::Unbounded, &scorer, &mutator);

        if exact_hit {
            prop_assert_eq!(calls.get(), 0);
        } else {
            prop_assert!(calls.get() > 0);
        }
    }

    #[test]
    fn unsorted_fallback_fires_whenever_short_of_limit(
        words in prop::collection::vec(word_strategy(), 1..8),
        query in word_strategy(),
        cap in 1usize..6,
    ) {
        let index = SuffixIndex::build(
            words.into_iter().map(|w| (w, ())).collect(),
            IdentityFold,
        );
        let calls = Cell::new(0);
        let mutator = CountingMutator {
            calls: &calls,
            inner: Levenshtein1::new(Alphabet::LowercaseLetters),
        };

        let exact_count = index.query(&query, Limit::Bounded(cap)).len();
        index.error_correcting_query(&query, Limit::Bounded(cap), &mutator);

        if exact_count >= cap {
            prop_assert_eq!(calls.get(), 0);
        } else {
            prop_assert!(calls.get() > 0);
        }
    }
}
