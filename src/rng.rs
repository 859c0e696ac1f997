//! Injectable sources of uniform randomness.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed integers.
///
/// Card sampling and the dealer's sixteen decision both draw from here, so a
/// scripted implementation makes whole rounds reproducible. No cryptographic
/// strength is required.
pub trait RandomSource {
    /// Returns a uniform integer in `[0, bound)`.
    fn next_in(&mut self, bound: usize) -> usize;
}

/// Default source backed by a seeded `ChaCha8` generator.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    inner: ChaCha8Rng,
}

impl ChaChaSource {
    /// Creates a source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for ChaChaSource {
    fn next_in(&mut self, bound: usize) -> usize {
        self.inner.random_range(0..bound)
    }
}

/// Replays a predetermined sequence of values.
///
/// Used to make shuffles and dealer decisions deterministic in tests and
/// replays.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<usize>,
}

impl ScriptedSource {
    /// Creates a source that yields `values` in order.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Appends more values to the script.
    pub fn extend(&mut self, values: impl IntoIterator<Item = usize>) {
        self.values.extend(values);
    }
}

impl RandomSource for ScriptedSource {
    /// # Panics
    ///
    /// Panics if the script has run dry or the next scripted value is not
    /// below `bound`; both are authoring mistakes in the script.
    fn next_in(&mut self, bound: usize) -> usize {
        let value = self
            .values
            .pop_front()
            .expect("scripted source ran out of values");
        assert!(
            value < bound,
            "scripted value {value} out of range 0..{bound}"
        );
        value
    }
}
