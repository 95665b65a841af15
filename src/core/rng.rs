//! Deterministic random number generation for deck shuffling.
//!
//! - **Deterministic**: same seed, same deck order
//! - **Context streams**: independent sequences for different purposes
//!
//! ```
//! use rust_mille::core::GameRng;
//!
//! let mut a = GameRng::new(7).for_context("deck");
//! let mut b = GameRng::new(7).for_context("deck");
//!
//! let mut left: Vec<u32> = (0..20).collect();
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a named context.
    ///
    /// The same context always yields the same stream for the same seed,
    /// on any toolchain: the derived seed uses `FxHasher`, not `std`'s
    /// unspecified default hasher.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
