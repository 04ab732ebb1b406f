//! Seedable random source owned by each wrapper.
//!
//! A [`NoiseRng`] carries a *stream* id. Stream `k` starts `k` Xoshiro jumps
//! (`k * 2^128` draws) past the sequence its seed begins, so two generators
//! reseeded with the same value draw non-overlapping sequences as long as
//! their streams differ. Seeding costs one jump per stream step, which suits
//! the small stream ids of stacked wrappers.

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Clone)]
pub struct NoiseRng {
    inner: Xoshiro256StarStar,
    stream: u64,
}

impl NoiseRng {
    /// Generator on stream 0.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_stream(seed, 0)
    }

    #[must_use]
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        Self {
            inner: seeded(seed, stream),
            stream,
        }
    }

    /// Generator seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy(stream: u64) -> Self {
        Self::with_stream(rand::random(), stream)
    }

    #[must_use]
    pub fn stream(&self) -> u64 {
        self.stream
    }

    /// Restart the sequence from `seed`, keeping the stream.
    pub fn reseed(&mut self, seed: u64) {
        self.inner = seeded(seed, self.stream);
    }

    /// Single activation draw: `true` with probability `rate`.
    ///
    /// A rate of 0 never fires and a rate of 1 always fires.
    pub fn activate(&mut self, rate: f64) -> bool {
        self.inner.gen::<f64>() < rate
    }

    /// Uniform draw from `[low, high)`; exactly `low` when `low == high`.
    pub fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.inner.gen::<f32>() * (high - low) + low
    }

    /// `true` with probability `p`, which must lie in `[0, 1]`.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p)
    }
}

impl RngCore for NoiseRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

fn seeded(seed: u64, stream: u64) -> Xoshiro256StarStar {
    let mut inner = Xoshiro256StarStar::seed_from_u64(seed);
    for _ in 0..stream {
        inner.jump();
    }
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut NoiseRng) -> Vec<u64> {
        (0..8).map(|_| rng.next_u64()).collect()
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = NoiseRng::new(333);
        let mut b = NoiseRng::new(333);
        assert_eq!(draws(&mut a), draws(&mut b));
    }

    #[test]
    fn streams_are_independent() {
        let mut a = NoiseRng::with_stream(333, 1);
        let mut b = NoiseRng::with_stream(333, 2);
        assert_ne!(draws(&mut a), draws(&mut b));
    }

    #[test]
    fn stream_starts_one_jump_per_step_in() {
        let mut base = Xoshiro256StarStar::seed_from_u64(333);
        base.jump();
        base.jump();
        let mut rng = NoiseRng::with_stream(333, 2);
        let expected: Vec<u64> = (0..8).map(|_| base.next_u64()).collect();
        assert_eq!(draws(&mut rng), expected);

        let mut plain = Xoshiro256StarStar::seed_from_u64(333);
        let expected: Vec<u64> = (0..8).map(|_| plain.next_u64()).collect();
        assert_eq!(draws(&mut NoiseRng::new(333)), expected);
    }

    #[test]
    fn reseed_restarts_the_stream() {
        let mut rng = NoiseRng::with_stream(1, 4);
        let first = draws(&mut rng);
        rng.reseed(1);
        assert_eq!(draws(&mut rng), first);
        assert_eq!(rng.stream(), 4);
    }

    #[test]
    fn activation_extremes() {
        let mut rng = NoiseRng::new(42);
        for _ in 0..1000 {
            assert!(!rng.activate(0.0));
            assert!(rng.activate(1.0));
        }
    }

    #[test]
    fn uniform_range() {
        let mut rng = NoiseRng::new(42);
        for _ in 0..100 {
            let v = rng.uniform(5.0, 10.0);
            assert!((5.0..=10.0).contains(&v));
        }
        assert!((rng.uniform(1.0, 1.0) - 1.0).abs() < f32::EPSILON);
    }
}
