//! Additive noise: `value + draw`, one independent draw per element.

use rand_distr::{Distribution, Normal};

use crate::error::{check_finite, check_range, NoiseError, Result};
use crate::model::NoiseModel;
use crate::rng::NoiseRng;

/// Adds normally distributed noise with the given mean and standard
/// deviation.
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    mean: f32,
    std: f32,
    dist: Normal<f32>,
}

impl GaussianNoise {
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] for non-finite parameters or a
    /// negative standard deviation.
    pub fn new(mean: f32, std: f32) -> Result<Self> {
        check_finite("mean", f64::from(mean))?;
        check_finite("std", f64::from(std))?;
        if std < 0.0 {
            return Err(NoiseError::invalid("std", format!("must be non-negative, got {std}")));
        }
        let dist = Normal::new(mean, std).map_err(|e| NoiseError::invalid("std", e.to_string()))?;
        Ok(Self { mean, std, dist })
    }

    #[must_use]
    pub fn mean(&self) -> f32 {
        self.mean
    }

    #[must_use]
    pub fn std(&self) -> f32 {
        self.std
    }
}

impl Default for GaussianNoise {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std: 0.01,
            dist: Normal::new(0.0, 0.01).expect("valid default"),
        }
    }
}

impl NoiseModel for GaussianNoise {
    fn perturb(&mut self, value: &mut [f32], rng: &mut NoiseRng) -> Result<()> {
        for v in value.iter_mut() {
            *v += self.dist.sample(rng);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "gaussian"
    }
}

/// Adds noise drawn uniformly from `[low, high)`.
///
/// The default range `[-0.1, 0.1)` suits observations and actions. Rewards
/// are usually an order of magnitude smaller; see
/// [`UniformNoise::reward_default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformNoise {
    low: f32,
    high: f32,
}

impl UniformNoise {
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] when `low > high` or a bound is
    /// not finite.
    pub fn new(low: f32, high: f32) -> Result<Self> {
        check_range(low, high)?;
        Ok(Self { low, high })
    }

    /// Default range for the reward channel, `[-0.01, 0.01)`.
    #[must_use]
    pub const fn reward_default() -> Self {
        Self {
            low: -0.01,
            high: 0.01,
        }
    }

    #[must_use]
    pub fn low(&self) -> f32 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f32 {
        self.high
    }
}

impl Default for UniformNoise {
    fn default() -> Self {
        Self {
            low: -0.1,
            high: 0.1,
        }
    }
}

impl NoiseModel for UniformNoise {
    fn perturb(&mut self, value: &mut [f32], rng: &mut NoiseRng) -> Result<()> {
        for v in value.iter_mut() {
            *v += rng.uniform(self.low, self.high);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_rejects_negative_std() {
        assert!(matches!(
            GaussianNoise::new(0.0, -0.5),
            Err(NoiseError::InvalidConfig { param: "std", .. })
        ));
        assert!(GaussianNoise::new(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn gaussian_without_spread_adds_mean() {
        let mut noise = GaussianNoise::new(1.0, 0.0).unwrap();
        let mut rng = NoiseRng::new(333);
        let mut value = vec![0.5, -2.0, 10.0];
        noise.perturb(&mut value, &mut rng).unwrap();
        assert_eq!(value, vec![1.5, -1.0, 11.0]);
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn gaussian_sample_statistics() {
        let mut noise = GaussianNoise::new(2.0, 0.5).unwrap();
        let mut rng = NoiseRng::new(7);
        let mut value = vec![0.0; 20_000];
        noise.perturb(&mut value, &mut rng).unwrap();
        let n = value.len() as f32;
        let mean = value.iter().sum::<f32>() / n;
        let var = value.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
        assert!((mean - 2.0).abs() < 0.02, "mean {mean}");
        assert!((var.sqrt() - 0.5).abs() < 0.02, "std {}", var.sqrt());
    }

    #[test]
    fn uniform_rejects_inverted_bounds() {
        assert!(matches!(
            UniformNoise::new(1.0, -1.0),
            Err(NoiseError::InvalidConfig { param: "low", .. })
        ));
        assert!(UniformNoise::new(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn uniform_rejects_overflowing_span() {
        assert!(matches!(
            UniformNoise::new(-f32::MAX, f32::MAX),
            Err(NoiseError::InvalidConfig { param: "high", .. })
        ));
        assert!(UniformNoise::new(-f32::MAX / 2.0, f32::MAX / 2.0).is_ok());
    }

    #[test]
    fn reward_default_is_narrower() {
        let reward = UniformNoise::reward_default();
        assert_eq!(UniformNoise::new(-0.01, 0.01).unwrap(), reward);
        assert!(reward.high() < UniformNoise::default().high());

        let mut noise = reward;
        let mut rng = NoiseRng::new(5);
        let mut value = vec![1.0; 100];
        noise.perturb(&mut value, &mut rng).unwrap();
        assert!(value.iter().all(|v| (v - 1.0).abs() <= 0.01 + 1e-6));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn uniform_offsets_stay_in_range() {
        let mut noise = UniformNoise::new(-0.1, 0.1).unwrap();
        let mut rng = NoiseRng::new(1);
        let mut value = vec![3.0; 1000];
        noise.perturb(&mut value, &mut rng).unwrap();
        assert!(value.iter().all(|v| (2.9 - 1e-6..=3.1 + 1e-6).contains(v)));
        assert!(value.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn uniform_degenerate_range_is_exact() {
        let mut noise = UniformNoise::new(1.0, 1.0).unwrap();
        let mut rng = NoiseRng::new(1);
        let mut value = vec![0.0, 2.0];
        noise.perturb(&mut value, &mut rng).unwrap();
        assert_eq!(value, vec![1.0, 3.0]);
    }
}
