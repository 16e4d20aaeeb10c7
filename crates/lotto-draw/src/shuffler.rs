//! Shuffler: uniform 5-subsets of 1..=36 via Fisher-Yates

use lotto_core::{Candidate, Number, COMBINATION_SIZE, MAX_NUMBER, MIN_NUMBER};
use crate::source::RandomSource;

/// In-place Fisher-Yates shuffle.
///
/// Walks `i` from the last index down to 1 and swaps slot `i` with a uniform
/// `j` in `[0, i]`. Every permutation is equally likely for a uniform source.
pub fn fisher_yates<T, S: RandomSource + ?Sized>(items: &mut [T], source: &mut S) {
    for i in (1..items.len()).rev() {
        let j = source.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Shuffle a copy of `pool` and return its first `k` items, sorted.
///
/// `k` larger than the pool yields the whole pool.
pub fn sample_subset<T, S>(pool: &[T], k: usize, source: &mut S) -> Vec<T>
where
    T: Copy + Ord,
    S: RandomSource + ?Sized,
{
    let mut items = pool.to_vec();
    fisher_yates(&mut items, source);
    items.truncate(k);
    items.sort_unstable();
    items
}

/// Draws candidates from a random source
#[derive(Debug, Clone)]
pub struct Shuffler<S> {
    source: S,
}

impl<S: RandomSource> Shuffler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Shuffle a fresh 1..=36 pool and keep the first five numbers
    pub fn sample(&mut self) -> Candidate {
        let mut pool: Vec<Number> = (MIN_NUMBER..=MAX_NUMBER).collect();
        fisher_yates(&mut pool, &mut self.source);

        let mut picked = [0; COMBINATION_SIZE];
        picked.copy_from_slice(&pool[..COMBINATION_SIZE]);
        Candidate::new(picked).expect("a shuffled 1..=36 pool holds distinct in-range numbers")
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
