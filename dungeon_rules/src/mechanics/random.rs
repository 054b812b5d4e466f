//! The random source.
//!
//! Every stochastic decision in a run (coin flips, picking an artifact,
//! sampling library clues) goes through a [`RandomSource`] handed in by the
//! caller. Nothing reaches for a global generator, so a seeded source
//! replays a run exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of randomness for a run.
pub trait RandomSource {
    /// Bernoulli draw that is `true` with the given probability.
    ///
    /// Probabilities outside `[0, 1]` are clamped; NaN never succeeds.
    fn coin_flip(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Up to `amount` distinct indices from `0..len`, in draw order.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;

    /// Pick one element uniformly, or `None` from an empty slice.
    fn uniform_choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.pick_index(items.len()))
    }

    /// Draw `amount` distinct elements without replacement.
    ///
    /// Returns fewer than `amount` only when the slice is shorter.
    fn sample_without_replacement<'a, T>(&mut self, items: &'a [T], amount: usize) -> Vec<&'a T> {
        self.sample_indices(items.len(), amount)
            .into_iter()
            .filter_map(|index| items.get(index))
            .collect()
    }
}

/// A [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

/// The usual source: a seedable standard generator.
pub type SeededRandom = RngSource<StdRng>;

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Create a source that replays the same draws for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn coin_flip(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }
}

/// A [`RandomSource`] that replays pre-recorded draws.
///
/// Coin flips and indices are consumed front to back. Once a queue runs dry,
/// coin flips only succeed for certain events (`probability >= 1`) and
/// indices fall back to the lowest one still available.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    flips: VecDeque<bool>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue coin flip results.
    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }

    /// Queue index draws. Values are reduced modulo the length asked for.
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Check if every scripted draw has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.flips.is_empty() && self.indices.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn coin_flip(&mut self, probability: f64) -> bool {
        self.flips.pop_front().unwrap_or(probability >= 1.0)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.indices.pop_front().map_or(0, |index| index % len)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        let mut picked = Vec::with_capacity(amount);

        while picked.len() < amount {
            let candidate = match self.indices.pop_front() {
                Some(index) => index % len,
                None => match (0..len).find(|index| !picked.contains(index)) {
                    Some(free) => free,
                    None => break,
                },
            };
            if !picked.contains(&candidate) {
                picked.push(candidate);
            }
        }

        picked
    }
}
