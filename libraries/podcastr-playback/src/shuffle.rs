//! Random source for shuffle navigation
//!
//! Shuffle here is a single uniform draw over the whole queue per "next".
//! The current position is not excluded, so the same episode can repeat.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index picker backed by a seedable RNG
#[derive(Debug, Clone)]
pub struct ShuffleSource {
    rng: StdRng,
}

impl ShuffleSource {
    /// Create a picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic picker
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build from an optional seed
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Draw an index in `[0, len)`. Returns `None` for an empty range.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

impl Default for ShuffleSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
