//! Construction and substring interval search for [`SuffixIndex`].
//!
//! The suffix array itself is two packed `Vec<u32>`s, not a `Vec` of
//! boxed `(RecordId, offset)` pairs: `word_ix[k]`/`suf_ix[k]` name the
//! k-th suffix in sorted order. Keeping them as parallel primitive arrays
//! instead of a vector of pairs is what makes the binary search in
//! [`SuffixIndex::search`] cache-friendly.

use crate::contracts;
use crate::fold::Fold;
use crate::record::{Record, RecordId};

/// An in-memory inverted suffix array over a dictionary of `(display,
/// payload)` pairs, searchable for any contiguous substring.
///
/// `F` is the byte folder applied to every record at insertion time and
/// to every query at search time - storing it on the index (rather than
/// passing it to every call) guarantees build-time and query-time folding
/// can never drift apart, the same way the reference Go implementation
/// this was adapted from carries its `Conversion func(string) []byte` as
/// a struct field rather than a call argument.
#[derive(Debug, Clone)]
pub struct SuffixIndex<F, P> {
    /// `word_ix[k]` is the record that owns the k-th suffix in sorted order.
    pub(crate) word_ix: Vec<u32>,
    /// `suf_ix[k]` is that suffix's starting byte offset within the
    /// record's folded form.
    pub(crate) suf_ix: Vec<u32>,
    pub(crate) records: Vec<Record<P>>,
    pub(crate) fold: F,
}

impl<F: Fold, P> SuffixIndex<F, P> {
    /// Build an index from a batch of `(display, payload)` pairs.
    ///
    /// Runs in O(M log M) where `M` is the total number of bytes across
    /// every folded record: linear work to enumerate every suffix, plus
    /// one comparison sort.
    pub fn build(records: Vec<(String, P)>, fold: F) -> Self {
        let records: Vec<Record<P>> = records
            .into_iter()
            .map(|(display, payload)| {
                let folded = fold.fold(&display);
                Record::new(display, folded, payload)
            })
            .collect();

        let mut word_ix = Vec::new();
        let mut suf_ix = Vec::new();
        for (i, record) in records.iter().enumerate() {
            for j in 0..record.folded.len() {
                word_ix.push(i as u32);
                suf_ix.push(j as u32);
            }
        }

        let mut order: Vec<usize> = (0..word_ix.len()).collect();
        order.sort_by(|&a, &b| {
            suffix_bytes(&records, word_ix[a], suf_ix[a])
                .cmp(suffix_bytes(&records, word_ix[b], suf_ix[b]))
        });
        let word_ix: Vec<u32> = order.iter().map(|&i| word_ix[i]).collect();
        let suf_ix: Vec<u32> = order.iter().map(|&i| suf_ix[i]).collect();

        let index = SuffixIndex {
            word_ix,
            suf_ix,
            records,
            fold,
        };

        contracts::check_all_entries_valid(&index.word_ix, &index.suf_ix, &index.records);
        contracts::check_suffixes_sorted(&index.word_ix, &index.suf_ix, &index.records);
        index
    }

    /// Number of records in the dictionary (including ones with an empty
    /// folded form, which are unreachable by any non-empty query).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of indexed suffixes, `M` in the data model.
    pub fn suffix_count(&self) -> usize {
        self.word_ix.len()
    }

    pub(crate) fn fold_query(&self, word: &str) -> Vec<u8> {
        self.fold.fold(word)
    }

    pub(crate) fn record(&self, id: RecordId) -> &Record<P> {
        &self.records[id.as_usize()]
    }

    /// The maximal half-open interval `[lo, hi)` of `(word_ix, suf_ix)`
    /// whose suffixes begin with `query`.
    ///
    /// Walks `query` byte by byte, narrowing `[low, high)` with two
    /// binary searches per byte: a lower-bound search for the smallest
    /// position whose byte at this column is `>= query[a]`, and an
    /// upper-bound search for the smallest position whose byte is
    /// `> query[a]`. A suffix that runs out of bytes at this column
    /// compares as strictly less than any actual byte, so exhausted
    /// suffixes sort to the low side of the bracket and drop out of
    /// consideration exactly when they stop matching.
    pub fn search(&self, query: &[u8]) -> (usize, usize) {
        let total = self.word_ix.len();
        let mut low = 0usize;
        let mut high = total;

        for (a, &c) in query.iter().enumerate() {
            let mut i = low;
            let mut j = high;
            while i < j {
                let h = (i + j) / 2;
                match self.byte_at(h, a) {
                    None => i = h + 1,
                    Some(e) if e < c => i = h + 1,
                    Some(e) => {
                        j = h;
                        if e > c {
                            high = h;
                        }
                    }
                }
            }
            low = i;
            if low == high {
                contracts::check_interval_bounds(low, high, total);
                return (low, high);
            }

            let mut j = high;
            let i_start = low;
            let mut i = i_start;
            while i < j {
                let h = (i + j) / 2;
                match self.byte_at(h, a) {
                    None => i = h + 1,
                    Some(e) if e <= c => i = h + 1,
                    Some(_) => j = h,
                }
            }
            high = j;
            if low == high {
                contracts::check_interval_bounds(low, high, total);
                return (low, high);
            }
        }

        contracts::check_interval_bounds(low, high, total);
        (low, high)
    }

    /// The byte at column `a` of the suffix named by index `h`, or `None`
    /// if that suffix is shorter than `a` bytes.
    #[inline]
    fn byte_at(&self, h: usize, a: usize) -> Option<u8> {
        let record = &self.records[self.word_ix[h] as usize];
        let start = self.suf_ix[h] as usize;
        record.folded.get(start + a).copied()
    }
}

#[inline]
fn suffix_bytes<P>(records: &[Record<P>], word_ix: u32, suf_ix: u32) -> &[u8] {
    &records[word_ix as usize].folded[suf_ix as usize..]
}
