//! Entropy-backed buff randomness for live sessions.

use inventory_core::BuffRng;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// [`BuffRng`] over the standard CSPRNG.
pub struct SystemRng {
    inner: StdRng,
}

impl SystemRng {
    /// Seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl BuffRng for SystemRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_stays_half_open() {
        let mut rng = SystemRng::seeded(11);
        for _ in 0..500 {
            let value = rng.range(1, 4);
            assert!((1..4).contains(&value));
        }
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.range(9, 2), 9);
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = SystemRng::seeded(3);
        let mut b = SystemRng::seeded(3);
        let rolls_a: Vec<_> = (0..8).map(|_| a.range(0, 100)).collect();
        let rolls_b: Vec<_> = (0..8).map(|_| b.range(0, 100)).collect();
        assert_eq!(rolls_a, rolls_b);
    }
}
