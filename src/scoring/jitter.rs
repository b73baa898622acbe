use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of tie-breaking noise for candidate scores.
pub trait RandomSource {
    /// Returns a value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadJitter;

impl RandomSource for ThreadJitter {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededJitter {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always yields the same value; `FixedJitter(0.0)` removes jitter entirely.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl RandomSource for FixedJitter {
    fn next_f64(&mut self) -> f64 {
        if self.0.is_nan() || self.0 < 0.0 {
            return 0.0;
        }
        self.0.min(1.0 - f64::EPSILON)
    }
}
