//! Multiplicative noise: `value * factor`, factors drawn from `[low, high)`.

use serde::{Deserialize, Serialize};

use crate::error::{check_range, NoiseError, Result};
use crate::model::NoiseModel;
use crate::rng::NoiseRng;

/// How many scaling factors are drawn per perturbation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factors {
    /// One factor scales the whole value.
    #[default]
    Shared,
    /// One factor per element.
    PerElement,
    /// Exactly `n` factors; `n` must be 1 or the value length.
    Exact(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformScale {
    low: f32,
    high: f32,
    factors: Factors,
}

impl UniformScale {
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] when `low > high`, a bound is
    /// not finite, or `factors` is `Exact(0)`.
    pub fn new(low: f32, high: f32, factors: Factors) -> Result<Self> {
        check_range(low, high)?;
        if factors == Factors::Exact(0) {
            return Err(NoiseError::invalid("factors", "at least one factor is required"));
        }
        Ok(Self { low, high, factors })
    }

    /// Shared-factor scaling, the common case.
    ///
    /// # Errors
    ///
    /// Same as [`UniformScale::new`].
    pub fn shared(low: f32, high: f32) -> Result<Self> {
        Self::new(low, high, Factors::Shared)
    }

    #[must_use]
    pub fn low(&self) -> f32 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f32 {
        self.high
    }

    #[must_use]
    pub fn factors(&self) -> Factors {
        self.factors
    }
}

impl Default for UniformScale {
    fn default() -> Self {
        Self {
            low: 0.9,
            high: 1.1,
            factors: Factors::Shared,
        }
    }
}

impl NoiseModel for UniformScale {
    fn perturb(&mut self, value: &mut [f32], rng: &mut NoiseRng) -> Result<()> {
        let per_element = match self.factors {
            Factors::Shared | Factors::Exact(1) => false,
            Factors::PerElement => true,
            Factors::Exact(n) if n == value.len() => true,
            Factors::Exact(n) => {
                return Err(NoiseError::ShapeMismatch {
                    expected: n,
                    actual: value.len(),
                })
            }
        };
        if per_element {
            for v in value.iter_mut() {
                *v *= rng.uniform(self.low, self.high);
            }
        } else {
            let factor = rng.uniform(self.low, self.high);
            for v in value.iter_mut() {
                *v *= factor;
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "uniform_scale"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_factor_scales_uniformly() {
        let mut noise = UniformScale::shared(0.5, 2.0).unwrap();
        let mut rng = NoiseRng::new(3);
        let mut value = vec![1.0, 2.0, 4.0];
        noise.perturb(&mut value, &mut rng).unwrap();
        let factor = value[0];
        assert!((0.5..2.0).contains(&factor));
        assert!((value[1] - 2.0 * factor).abs() < 1e-6);
        assert!((value[2] - 4.0 * factor).abs() < 1e-6);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn per_element_factors_differ() {
        let mut noise = UniformScale::new(0.5, 2.0, Factors::PerElement).unwrap();
        let mut rng = NoiseRng::new(3);
        let mut value = vec![1.0; 8];
        noise.perturb(&mut value, &mut rng).unwrap();
        assert!(value.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn identity_and_zero_scaling() {
        let mut rng = NoiseRng::new(3);
        let mut value = vec![1.5, -3.0];
        UniformScale::shared(1.0, 1.0).unwrap().perturb(&mut value, &mut rng).unwrap();
        assert_eq!(value, vec![1.5, -3.0]);
        UniformScale::shared(0.0, 0.0).unwrap().perturb(&mut value, &mut rng).unwrap();
        assert!(value.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn exact_factor_count_must_match() {
        let mut noise = UniformScale::new(0.9, 1.1, Factors::Exact(3)).unwrap();
        let mut rng = NoiseRng::new(3);
        let mut value = vec![1.0; 4];
        assert!(matches!(
            noise.perturb(&mut value, &mut rng),
            Err(NoiseError::ShapeMismatch {
                expected: 3,
                actual: 4
            })
        ));
        let mut value = vec![1.0; 3];
        assert!(noise.perturb(&mut value, &mut rng).is_ok());
        assert!(UniformScale::new(0.9, 1.1, Factors::Exact(0)).is_err());
        assert!(UniformScale::shared(1.1, 0.9).is_err());
    }

    #[test]
    fn overflowing_factor_span_is_rejected() {
        assert!(matches!(
            UniformScale::shared(-f32::MAX, f32::MAX),
            Err(NoiseError::InvalidConfig { param: "high", .. })
        ));
    }
}
