//! Caller-defined ranking for [`crate::SuffixIndex::sorted_query`] and its
//! error-correcting counterpart.
//!
//! The index never commits to a priority scheme of its own - it has no
//! notion of term frequency, field weighting, or recency. All of that
//! lives in the caller's `Score` implementation; the index only guarantees
//! the accumulator honors whatever ordering the scores imply.

/// A callable that ranks a single matching suffix. Larger is better.
pub trait Score<P> {
    /// * `display` - the record's original text.
    /// * `payload` - the record's opaque payload.
    /// * `record_len` - length of the record's folded form, in bytes.
    /// * `suffix_start` - byte offset within the folded form where the
    ///   match begins.
    fn score(&self, display: &str, payload: &P, record_len: usize, suffix_start: usize) -> f64;
}

impl<P, F> Score<P> for F
where
    F: Fn(&str, &P, usize, usize) -> f64,
{
    fn score(&self, display: &str, payload: &P, record_len: usize, suffix_start: usize) -> f64 {
        self(display, payload, record_len, suffix_start)
    }
}
