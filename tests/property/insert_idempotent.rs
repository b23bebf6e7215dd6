//! Invariant 6: inserting the same display twice is equivalent, for every
//! query, to inserting it once with the final payload.

use inverdex::{IdentityFold, Limit, SuffixIndex};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,8}").unwrap()
}

proptest! {
    #[test]
    fn double_insert_matches_single_insert_with_final_payload(
        display in word_strategy(),
        other in prop::collection::vec(word_strategy(), 0..6),
        p1 in 0u32..1000,
        p2 in 0u32..1000,
    ) {
        let mut twice = SuffixIndex::build(
            other.iter().cloned().map(|w| (w, 0u32)).collect(),
            IdentityFold,
        );
        twice.insert(display.clone(), p1);
        twice.insert(display.clone(), p2);

        let mut once = SuffixIndex::build(
            other.into_iter().map(|w| (w, 0u32)).collect(),
            IdentityFold,
        );
        once.insert(display.clone(), p2);

        prop_assert_eq!(twice.len(), once.len());

        let hits_twice = twice.query(&display, Limit::Unbounded);
        let hits_once = once.query(&display, Limit::Unbounded);
        prop_assert_eq!(hits_twice, hits_once);
    }
}
