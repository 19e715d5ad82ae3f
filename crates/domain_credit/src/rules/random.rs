//! Randomness sources for the randomized rejection rule

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use std::sync::Mutex;

/// Supplies the single random decision the rule pipeline needs
///
/// Shared across concurrent evaluations, hence `Send + Sync`.
pub trait RandomSource: Send + Sync + Debug {
    /// Uniform draw over two outcomes
    fn coin_flip(&self) -> bool;
}

/// Production source backed by the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn coin_flip(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}

/// Always returns the same outcome
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub bool);

impl RandomSource for FixedRandom {
    fn coin_flip(&self) -> bool {
        self.0
    }
}

/// Reproducible sequence from a fixed seed
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn coin_flip(&self) -> bool {
        // A poisoned lock still holds a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sequences_repeat() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let first: Vec<bool> = (0..32).map(|_| a.coin_flip()).collect();
        let second: Vec<bool> = (0..32).map(|_| b.coin_flip()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_thread_random_produces_both_outcomes() {
        let source = ThreadRandom;
        let draws: Vec<bool> = (0..256).map(|_| source.coin_flip()).collect();
        assert!(draws.iter().any(|d| *d));
        assert!(draws.iter().any(|d| !*d));
    }
}
