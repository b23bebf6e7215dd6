//! Invariant 3: the suffix array stays sorted through construction and any
//! sequence of inserts.
//!
//! `SuffixIndex::build` and `SuffixIndex::insert` each run a debug-only
//! sortedness contract internally, so this test doesn't need direct
//! access to `word_ix`/`suf_ix` - a violation surfaces as a panic from
//! inside the library itself.

use inverdex::{IdentityFold, Limit, SuffixIndex};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,8}").unwrap()
}

proptest! {
    #[test]
    fn inserts_preserve_sortedness(
        initial in prop::collection::vec(word_strategy(), 0..8),
        inserted in prop::collection::vec(word_strategy(), 1..8),
    ) {
        let mut index = SuffixIndex::build(
            initial.into_iter().map(|w| (w, 0u32)).collect(),
            IdentityFold,
        );

        for (i, word) in inserted.into_iter().enumerate() {
            index.insert(word.clone(), i as u32);
            // if the sort was broken, this would return nonsense instead
            // of panicking, so also check the result is self-consistent.
            let hits = index.query(&word, Limit::Unbounded);
            prop_assert!(hits.iter().any(|(d, _)| *d == word));
        }
    }
}
