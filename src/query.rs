//! The four query variants and insertion, all as inherent methods on
//! [`crate::SuffixIndex`].
//!
//! `query`/`error_correcting_query` accumulate into a `HashSet<RecordId>`
//! presence gate - first match wins, order is whatever the suffix array
//! happens to yield. `sorted_query`/`sorted_error_correcting_query`
//! accumulate into a `HashMap<RecordId, f64>` best-score gate and keep a
//! score-descending `Vec` capped at the caller's limit, inserting each
//! candidate at its sorted position and dropping the lowest-scoring entry
//! on overflow. This mirrors the two independent accumulator shapes in
//! the reference Go `Query`/`sortedQuery` split this crate was adapted
//! from - unsorted and scored queries were never meant to share one
//! accumulator.

use std::collections::{HashMap, HashSet};

use crate::contracts;
use crate::fold::Fold;
use crate::index::SuffixIndex;
use crate::limit::Limit;
use crate::record::RecordId;
use crate::score::Score;

impl<F: Fold, P> SuffixIndex<F, P> {
    /// Every distinct record whose folded form contains `word` as a
    /// substring, in no particular order, up to `limit` distinct records.
    pub fn query(&self, word: &str, limit: Limit) -> Vec<(&str, &P)> {
        let folded = self.fold_query(word);
        let (lo, hi) = self.search(&folded);
        self.collect_unsorted(lo, hi, limit)
    }

    /// Like [`Self::query`], but if fewer than `limit` records are found,
    /// falls back to querying every variant `mutator` produces from the
    /// folded query and merging in whatever those turn up.
    ///
    /// The fallback fires whenever the exact match comes up short, not
    /// only on a complete miss - a caller asking for 10 results who gets 3
    /// exact hits still wants the other 7 slots filled by near matches.
    pub fn error_correcting_query(
        &self,
        word: &str,
        limit: Limit,
        mutator: &impl crate::fuzzy::Mutate,
    ) -> Vec<(&str, &P)> {
        let folded = self.fold_query(word);
        let (lo, hi) = self.search(&folded);

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.accumulate_unsorted(lo, hi, limit, &mut seen, &mut out);

        if !limit.is_reached(out.len()) {
            for variant in mutator.mutate(&folded) {
                if limit.is_reached(out.len()) {
                    break;
                }
                let (lo, hi) = self.search(&variant);
                self.accumulate_unsorted(lo, hi, limit, &mut seen, &mut out);
            }
        }

        out
    }

    /// Every distinct record whose folded form contains `word`, ranked by
    /// `scorer` in descending order, up to `limit` distinct records.
    ///
    /// When two matching suffixes belong to the same record, only the
    /// higher-scoring one counts.
    pub fn sorted_query(
        &self,
        word: &str,
        limit: Limit,
        scorer: &impl Score<P>,
    ) -> Vec<(&str, &P, f64)> {
        let folded = self.fold_query(word);
        let (lo, hi) = self.search(&folded);

        let mut best: HashMap<RecordId, f64> = HashMap::new();
        let mut res: Vec<RecordId> = Vec::new();
        let mut scr: Vec<f64> = Vec::new();
        self.accumulate_scored(lo, hi, limit, scorer, &mut best, &mut res, &mut scr);

        self.finish_scored(res, scr, limit)
    }

    /// Like [`Self::sorted_query`], but if the exact match is completely
    /// empty, falls back to every variant `mutator` produces.
    ///
    /// Unlike [`Self::error_correcting_query`], the fallback here is
    /// gated on a total miss (`a == 0` suffixes matched), not on falling
    /// short of `limit`: once a scored query has anything to rank, near
    /// matches are not blended in underneath it.
    pub fn sorted_error_correcting_query(
        &self,
        word: &str,
        limit: Limit,
        scorer: &impl Score<P>,
        mutator: &impl crate::fuzzy::Mutate,
    ) -> Vec<(&str, &P, f64)> {
        let folded = self.fold_query(word);
        let (lo, hi) = self.search(&folded);

        let mut best: HashMap<RecordId, f64> = HashMap::new();
        let mut res: Vec<RecordId> = Vec::new();
        let mut scr: Vec<f64> = Vec::new();
        self.accumulate_scored(lo, hi, limit, scorer, &mut best, &mut res, &mut scr);

        if hi == lo {
            for variant in mutator.mutate(&folded) {
                let (lo, hi) = self.search(&variant);
                self.accumulate_scored(lo, hi, limit, scorer, &mut best, &mut res, &mut scr);
            }
        }

        self.finish_scored(res, scr, limit)
    }

    /// Insert `display` with `payload`, or overwrite the payload of an
    /// existing record with the same `display`.
    ///
    /// Re-folds `display` and splices its new suffixes into their sorted
    /// positions via [`Self::search`]'s lower bound - no full re-sort.
    pub fn insert(&mut self, display: String, payload: P) {
        let folded = self.fold_query(&display);

        // An exact-display match, if one exists, is one of the records
        // whose folded form matches `folded` exactly - i.e. one of the
        // full-length suffixes in the interval `search(folded)` returns.
        let (lo, hi) = self.search(&folded);
        for k in lo..hi {
            let word_ix = self.word_ix[k] as usize;
            if self.suf_ix[k] == 0
                && self.records[word_ix].folded.len() == folded.len()
                && self.records[word_ix].display == display
            {
                self.records[word_ix].payload = payload;
                return;
            }
        }

        let id = self.records.len() as u32;
        self.records
            .push(crate::record::Record::new(display, folded.clone(), payload));

        for offset in 0..folded.len() {
            let suffix = &folded[offset..];
            let pos = self.lower_bound(suffix);
            self.word_ix.insert(pos, id);
            self.suf_ix.insert(pos, offset as u32);
        }

        contracts::check_all_entries_valid(&self.word_ix, &self.suf_ix, &self.records);
        contracts::check_suffixes_sorted(&self.word_ix, &self.suf_ix, &self.records);
    }

    /// The smallest index `i` such that the suffix at `i` is `>= suffix`.
    fn lower_bound(&self, suffix: &[u8]) -> usize {
        let mut i = 0usize;
        let mut j = self.word_ix.len();
        while i < j {
            let h = (i + j) / 2;
            let record = &self.records[self.word_ix[h] as usize];
            let start = self.suf_ix[h] as usize;
            if record.folded[start..] < *suffix {
                i = h + 1;
            } else {
                j = h;
            }
        }
        i
    }

    fn collect_unsorted(&self, lo: usize, hi: usize, limit: Limit) -> Vec<(&str, &P)> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.accumulate_unsorted(lo, hi, limit, &mut seen, &mut out);
        out
    }

    fn accumulate_unsorted<'a>(
        &'a self,
        lo: usize,
        hi: usize,
        limit: Limit,
        seen: &mut HashSet<RecordId>,
        out: &mut Vec<(&'a str, &'a P)>,
    ) {
        for k in lo..hi {
            if limit.is_reached(out.len()) {
                break;
            }
            let id = RecordId(self.word_ix[k]);
            if seen.insert(id) {
                let record = self.record(id);
                out.push((record.display.as_str(), &record.payload));
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn accumulate_scored(
        &self,
        lo: usize,
        hi: usize,
        limit: Limit,
        scorer: &impl Score<P>,
        best: &mut HashMap<RecordId, f64>,
        res: &mut Vec<RecordId>,
        scr: &mut Vec<f64>,
    ) {
        let cap = limit.as_usize();
        for k in lo..hi {
            let id = RecordId(self.word_ix[k]);
            let record = self.record(id);
            let suffix_start = self.suf_ix[k] as usize;
            let s =
                scorer.score(&record.display, &record.payload, record.folded.len(), suffix_start);

            // A record already present only ever moves - it never changes
            // how many records are held, so the cap never applies here.
            if let Some(&prev) = best.get(&id) {
                if s <= prev {
                    continue;
                }
                let old_pos = res.iter().position(|&r| r == id).expect("best and res agree");
                res.remove(old_pos);
                scr.remove(old_pos);
                let pos = scr.partition_point(|&existing| existing >= s);
                res.insert(pos, id);
                scr.insert(pos, s);
                best.insert(id, s);
                continue;
            }

            if let Some(cap) = cap {
                if cap == 0 {
                    continue;
                }
                if res.len() >= cap && s <= *scr.last().expect("cap > 0 implies res is full here") {
                    continue;
                }
            }

            let pos = scr.partition_point(|&existing| existing >= s);
            res.insert(pos, id);
            scr.insert(pos, s);
            best.insert(id, s);

            if let Some(cap) = cap {
                if res.len() > cap {
                    let dropped = res.pop().expect("just grew past cap");
                    scr.pop();
                    best.remove(&dropped);
                }
            }
        }
    }

    fn finish_scored(&self, res: Vec<RecordId>, scr: Vec<f64>, limit: Limit) -> Vec<(&str, &P, f64)> {
        contracts::check_scored_results_shape(&scr, limit.as_usize());
        res.into_iter()
            .zip(scr)
            .map(|(id, s)| {
                let record = self.record(id);
                (record.display.as_str(), &record.payload, s)
            })
            .collect()
    }
}
