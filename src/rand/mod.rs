//! Random index sources for password sampling.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform integers in `[0, bound)`.
pub trait RandomSource {
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

// =============================================================================
// Thread-local source
// =============================================================================

/// Default source: the thread-local generator from `rand`.
pub struct ThreadRand(ThreadRng);

impl ThreadRand {
    pub fn new() -> Self {
        ThreadRand(rand::thread_rng())
    }
}

impl Default for ThreadRand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRand {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

// =============================================================================
// Seeded source
// =============================================================================

/// Deterministic source for reproducible output (`--seed`, tests).
pub struct SeededRand {
    rng: StdRng,
}

impl SeededRand {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRand {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Human readable name of the active source, shown in the entropy header.
pub fn source_name(seed: Option<u64>) -> String {
    match seed {
        Some(s) => format!("seeded ({s})"),
        None => "thread_rng".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRand::new(42);
        let mut b = SeededRand::new(42);
        let xs: Vec<usize> = (0..32).map(|_| a.below(86)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.below(86)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = ThreadRand::new();
        for _ in 0..1000 {
            assert!(rng.below(52) < 52);
        }
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(None), "thread_rng");
        assert_eq!(source_name(Some(7)), "seeded (7)");
    }
}
