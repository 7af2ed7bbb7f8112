//! Uniform random draws for the asteroid generator
//!
//! Thin wrapper around `StdRng` so a scenario seed gives the same belt on
//! every run, while an absent seed falls back to OS entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Value in `[min, max)`. Returns `min` for an empty range instead of
    /// panicking like `gen_range` would.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.rng.gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_range() {
        let mut s = Sampler::new(Some(7));
        for _ in 0..10_000 {
            let x = s.uniform(-100.0, 100.0);
            assert!((-100.0..100.0).contains(&x), "out of range: {x}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Sampler::new(Some(42));
        let mut b = Sampler::new(Some(42));
        for _ in 0..100 {
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
        }
    }

    #[test]
    fn degenerate_range_returns_min() {
        let mut s = Sampler::new(Some(1));
        assert_eq!(s.uniform(3.0, 3.0), 3.0);
    }
}
