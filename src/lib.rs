//! An in-memory inverted suffix array for substring search over a
//! dictionary of short records.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐     ┌────────────┐     ┌────────────┐
//! │  record   │────▶│   index    │────▶│   query    │
//! │ (Record,  │     │(SuffixIndex│     │ (query,    │
//! │ RecordId) │     │ build,     │     │ sorted_*,  │
//! │           │     │ search)    │     │ insert)    │
//! └───────────┘     └────────────┘     └────────────┘
//!        ▲                 ▲                  ▲
//!        │                 │                  │
//! ┌───────────┐     ┌────────────┐     ┌────────────┐
//! │   fold    │     │   fuzzy    │     │   score    │
//! │ (Fold,    │     │ (Mutate,   │     │ (Score)    │
//! │ AsciiFold)│     │ Levenshtein│     │            │
//! └───────────┘     └────────────┘     └────────────┘
//! ```
//!
//! `SuffixIndex<F, P>` owns the packed `(word_ix, suf_ix)` suffix array
//! and a `Vec<Record<P>>`, plus the `F: Fold` used to turn display text
//! into the bytes actually indexed. `Fold`, `Score`, and `Mutate` are the
//! three capability seams callers plug into: folding and payload typing
//! are fixed when the index is built, while scoring and error-correction
//! are supplied fresh on each call, so the same index serves differently
//! ranked queries without rebuilding anything.
//!
//! ```
//! use inverdex::{AsciiFold, Limit, SuffixIndex};
//!
//! let index = SuffixIndex::build(
//!     vec![
//!         ("foobar".to_string(), 1u32),
//!         ("barfoo".to_string(), 2u32),
//!         ("dictionary".to_string(), 3u32),
//!     ],
//!     AsciiFold,
//! );
//!
//! let hits = index.query("ar", Limit::Bounded(5));
//! assert_eq!(hits.len(), 3);
//! ```

mod contracts;
mod fold;
mod fuzzy;
mod index;
mod limit;
mod query;
mod record;
mod score;

pub use fold::{fold_char, AsciiFold, Fold, IdentityFold};
pub use fuzzy::{Alphabet, Levenshtein1, Mutate};
pub use index::SuffixIndex;
pub use limit::Limit;
pub use record::{Record, RecordId};
pub use score::Score;
