//! Reference `Mutate` implementation: every byte sequence at
//! Damerau-Levenshtein distance 1 from the input, over a fixed alphabet.
//!
//! For each position, four operations are tried in a fixed order - delete,
//! insert, transpose, substitute - and the order is part of the observable
//! contract: callers relying on first-wins `seen`/`best` gating see
//! deterministic results only if that order is preserved.

use super::Alphabet;
use super::Mutate;

/// Generates every byte sequence at edit distance 1 from the input,
/// allowing delete, insert, transpose, and substitute, restricted to a
/// chosen [`Alphabet`] for the insert/substitute steps.
#[derive(Debug, Clone, Copy)]
pub struct Levenshtein1 {
    alphabet: Alphabet,
}

impl Levenshtein1 {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }
}

impl Mutate for Levenshtein1 {
    fn mutate(&self, word: &[u8]) -> Vec<Vec<u8>> {
        levenshtein1(word, &self.alphabet.bytes())
    }
}

/// Free-function form of the reference mutator, for callers who don't
/// want to construct a [`Levenshtein1`].
///
/// For every position `i` in `word`:
/// 1. **Delete** `word[i]`.
/// 2. If `i > 0`: for each `c` in `allowed_bytes`, **insert** `c` just
///    before `word[i]`.
/// 3. If `i > 0`: **transpose** `word[i]` and `word[i-1]`.
/// 4. For each `c` in `allowed_bytes` with `c != word[i]`, **substitute**
///    `word[i] <- c`.
pub fn levenshtein1(word: &[u8], allowed_bytes: &[u8]) -> Vec<Vec<u8>> {
    let n = word.len();
    let mut results = Vec::new();

    for i in 0..n {
        let t = word[i];

        // Delete
        let mut deleted = Vec::with_capacity(n - 1);
        deleted.extend_from_slice(&word[..i]);
        deleted.extend_from_slice(&word[i + 1..]);
        results.push(deleted);

        if i != 0 {
            // Insert, just before position i
            for &c in allowed_bytes {
                let mut inserted = Vec::with_capacity(n + 1);
                inserted.extend_from_slice(&word[..i]);
                inserted.push(c);
                inserted.extend_from_slice(&word[i..]);
                results.push(inserted);
            }

            // Transpose with the previous byte
            let mut transposed = word.to_vec();
            transposed.swap(i, i - 1);
            results.push(transposed);
        }

        // Substitute
        for &c in allowed_bytes {
            if c == t {
                continue;
            }
            let mut substituted = word.to_vec();
            substituted[i] = c;
            results.push(substituted);
        }
    }

    results
}
