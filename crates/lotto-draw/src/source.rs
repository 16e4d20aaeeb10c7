//! Random sources
//!
//! The sampler only ever asks for a uniform index below a bound, so any
//! generator can be plugged in. `RngSource` adapts the `rand` crate;
//! `SequenceSource` replays fixed indices for deterministic runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random index provider
pub trait RandomSource {
    /// Return an index in `[0, bound)`. Callers never pass `bound == 0`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// A `rand` generator used as a random source.
///
/// Can be seeded for deterministic replay, or created from system entropy.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    inner: R,
}

impl RngSource<StdRng> {
    /// Create from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.random_range(0..bound)
    }
}

/// Replays a fixed list of raw values, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, position: 0 }
    }

    /// A source that always answers `0`
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    /// How many indices have been handed out
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % bound
    }
}
