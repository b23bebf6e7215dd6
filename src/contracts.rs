//! Runtime contracts for the invariants in the data model.
//!
//! These are debug-mode assertions, not a validation layer: every check
//! here is `debug_assert!`-gated, so it costs nothing in release builds
//! and panics loudly the moment an invariant is violated during
//! development or testing.
//!
//! # INVARIANTS
//!
//! | Contract function              | Invariant                                            |
//! |---------------------------------|------------------------------------------------------|
//! | `check_entry_valid`             | suffix entry points at a real record and offset      |
//! | `check_suffixes_sorted`         | `(word_ix, suf_ix)` is lexicographically sorted      |
//! | `check_suffixes_complete`       | every `(record, offset)` pair appears exactly once   |
//! | `check_interval_bounds`         | a search interval is within `[0, len]`                |
//! | `check_scored_results_shape`    | a scored result list is sorted, deduped, within limit |

use crate::record::Record;

/// Check that a single suffix entry is well-formed for the given records.
///
/// # Panics (debug builds only)
/// Panics if `word_ix >= records.len()` or `suf_ix >= folded length`.
#[inline]
pub fn check_entry_valid<P>(word_ix: u32, suf_ix: u32, records: &[Record<P>]) {
    let word_ix = word_ix as usize;
    debug_assert!(
        word_ix < records.len(),
        "contract violation: word_ix {} >= records.len() {}",
        word_ix,
        records.len()
    );
    if word_ix < records.len() {
        debug_assert!(
            (suf_ix as usize) < records[word_ix].folded.len(),
            "contract violation: suf_ix {} >= folded.len() {} for record {}",
            suf_ix,
            records[word_ix].folded.len(),
            word_ix
        );
    }
}

/// Check that every suffix entry in the arrays is well-formed.
#[inline]
pub fn check_all_entries_valid<P>(word_ix: &[u32], suf_ix: &[u32], records: &[Record<P>]) {
    for (w, s) in word_ix.iter().zip(suf_ix.iter()) {
        check_entry_valid(*w, *s, records);
    }
}

/// Check that `(word_ix, suf_ix)` is sorted lexicographically by the
/// suffix each entry names.
///
/// # Panics (debug builds only)
/// Panics on the first adjacent pair that is out of order.
#[inline]
pub fn check_suffixes_sorted<P>(word_ix: &[u32], suf_ix: &[u32], records: &[Record<P>]) {
    for i in 1..word_ix.len() {
        let prev = suffix_at(records, word_ix[i - 1], suf_ix[i - 1]);
        let curr = suffix_at(records, word_ix[i], suf_ix[i]);
        debug_assert!(
            prev <= curr,
            "contract violation: suffix array not sorted at index {} ({:?} > {:?})",
            i,
            &prev[..prev.len().min(20)],
            &curr[..curr.len().min(20)]
        );
    }
}

/// Check that the suffix array is complete: every `(record, offset)` pair
/// appears exactly once. O(M^2); only meant for tests on small indexes.
#[inline]
pub fn check_suffixes_complete<P>(word_ix: &[u32], suf_ix: &[u32], records: &[Record<P>]) {
    for (r, rec) in records.iter().enumerate() {
        for offset in 0..rec.folded.len() {
            let count = word_ix
                .iter()
                .zip(suf_ix.iter())
                .filter(|(&w, &s)| w as usize == r && s as usize == offset)
                .count();
            debug_assert_eq!(
                count, 1,
                "contract violation: (record {}, offset {}) appears {} times, expected 1",
                r, offset, count
            );
        }
    }
}

/// Check that a search interval is within the bounds of the suffix array.
#[inline]
pub fn check_interval_bounds(lo: usize, hi: usize, total: usize) {
    debug_assert!(
        lo <= hi && hi <= total,
        "contract violation: interval [{}, {}) out of bounds for length {}",
        lo,
        hi,
        total
    );
}

/// Check that a scored result list is sorted strictly descending by
/// score and within the stated limit.
#[inline]
pub fn check_scored_results_shape(scores: &[f64], limit: Option<usize>) {
    if let Some(limit) = limit {
        debug_assert!(
            scores.len() <= limit,
            "contract violation: scored results {} exceed limit {}",
            scores.len(),
            limit
        );
    }
    for i in 1..scores.len() {
        debug_assert!(
            scores[i - 1] >= scores[i] || scores[i - 1].is_nan() || scores[i].is_nan(),
            "contract violation: scored results not descending at index {} ({} < {})",
            i,
            scores[i - 1],
            scores[i]
        );
    }
}

fn suffix_at<P>(records: &[Record<P>], word_ix: u32, suf_ix: u32) -> &[u8] {
    &records[word_ix as usize].folded[suf_ix as usize..]
}
