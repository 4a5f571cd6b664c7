use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform values in `[0, 1)` used to synthesize restaurant fields.
///
/// Kept behind a trait so synthesis can be replayed with known values.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Draws from the thread-local generator. Every load produces new values.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Deterministic generator for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_values_stay_in_unit_interval() {
        let mut thread = ThreadRandom;
        let mut seeded = SeededRandom::new(7);
        for _ in 0..1000 {
            let t = thread.next_unit();
            let s = seeded.next_unit();
            assert!((0.0..1.0).contains(&t));
            assert!((0.0..1.0).contains(&s));
        }
    }
}
