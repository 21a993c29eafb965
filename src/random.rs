use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)` consumed by initialization and sampling.
///
/// An instance must not be shared between engines that run concurrently.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Default source: a `StdRng` seeded from a `u64`.
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
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Draw a uniform integer from `[0, n)`. `n` must be non-zero.
pub(crate) fn uniform_index<R: RandomSource + ?Sized>(rng: &mut R, n: usize) -> usize {
    let i = (rng.next_f64() * n as f64) as usize;
    i.min(n - 1)
}
