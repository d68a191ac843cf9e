//! Injectable randomness.
//!
//! Generators draw through `&mut dyn RandomSource`, which any
//! [`rand::RngCore`] satisfies, and use `rand`'s `Rng` and `SliceRandom`
//! helpers on it. Tests pass a seeded [`SystemRandom`] or a
//! `rand::rngs::mock::StepRng`.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Random number source handed to generators and sessions.
pub trait RandomSource: RngCore {}

impl<R: RngCore> RandomSource for R {}

/// Production source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    /// Seeded from operating system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SystemRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::seq::SliceRandom;
    use rand::Rng;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = SystemRandom::seeded(7);
        let mut b = SystemRandom::seeded(7);
        let xs: Vec<u32> = (0..20).map(|_| a.gen_range(0..100)).collect();
        let ys: Vec<u32> = (0..20).map(|_| b.gen_range(0..100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn trait_object_drives_slice_helpers() {
        let mut seeded = SystemRandom::seeded(3);
        let rng: &mut dyn RandomSource = &mut seeded;
        let mut items: Vec<u32> = (0..10).collect();
        items.shuffle(rng);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());

        let empty: [u8; 0] = [];
        assert!(empty.choose(rng).is_none());
    }

    #[test]
    fn zero_step_always_picks_the_first_element() {
        let mut rng = StepRng::new(0, 0);
        let items = ["a", "b", "c"];
        for _ in 0..5 {
            assert_eq!(items.choose(&mut rng), Some(&"a"));
        }
    }
}
