//! Deterministic random number generation for shuffling.
//!
//! The table model never reaches for a global RNG: every shuffle takes an
//! explicit `&mut TableRng`, so replays and tests pin their seeds and get
//! identical card orders every run.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces the same shuffle sequence
//! - **Forkable**: derive independent streams (one per deck, one per table)
//! - **Uniform**: shuffles are Fisher-Yates, equally likely over all n! orders
//!
//! ## Usage
//!
//! ```
//! use cardtable::TableRng;
//!
//! let mut a = TableRng::new(42);
//! let mut b = TableRng::new(42);
//!
//! let mut xs = [1, 2, 3, 4, 5];
//! let mut ys = [1, 2, 3, 4, 5];
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//!
//! assert_eq!(xs, ys);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seedable RNG for card shuffling.
///
/// Wraps ChaCha8 for speed with high-quality randomness. Hosts that want
/// reproducible games construct it with a fixed seed; hosts that do not
/// care use [`TableRng::from_entropy`].
#[derive(Clone, Debug)]
pub struct TableRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl TableRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is retained, so a game can still be replayed by
    /// logging [`TableRng::seed`] and reconstructing with [`TableRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was constructed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into an independent deterministic stream.
    ///
    /// Each fork produces a different but reproducible sequence. Useful for
    /// giving each deck on a table its own stream from one master seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place, uniformly over all orderings.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut TableRng) -> Vec<u32> {
        let mut v: Vec<u32> = (0..10).collect();
        rng.shuffle(&mut v);
        v
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = TableRng::new(42);
        let mut rng2 = TableRng::new(42);

        for _ in 0..20 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = TableRng::new(1);
        let mut rng2 = TableRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_seed_is_retained() {
        let rng = TableRng::new(7);
        assert_eq!(rng.seed(), 7);

        let replay = TableRng::new(rng.seed());
        assert_eq!(replay.seed(), 7);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = TableRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(shuffled(&mut rng), shuffled(&mut forked));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = TableRng::new(42);
        let mut rng2 = TableRng::new(42);

        let mut forked1 = rng1.fork();
        let mut forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
        assert_eq!(shuffled(&mut forked1), shuffled(&mut forked2));
    }

    #[test]
    fn test_successive_forks_differ() {
        let mut rng = TableRng::new(42);

        let first = rng.fork();
        let second = rng.fork();

        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = TableRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        rng.shuffle(&mut data);

        assert_eq!(data.len(), 10);
        data.sort_unstable();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_from_entropy_is_replayable() {
        let mut rng = TableRng::from_entropy();
        let mut replay = TableRng::new(rng.seed());

        assert_eq!(shuffled(&mut rng), shuffled(&mut replay));
    }
}
