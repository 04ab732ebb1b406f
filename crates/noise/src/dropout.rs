use crate::error::{check_probability, Result};
use crate::model::NoiseModel;
use crate::rng::NoiseRng;

/// Zeroes each element independently with probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dropout {
    p: f64,
}

impl Dropout {
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`](crate::NoiseError::InvalidConfig)
    /// unless `p` lies in `[0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        check_probability("p", p)?;
        Ok(Self { p })
    }

    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Default for Dropout {
    fn default() -> Self {
        Self { p: 0.1 }
    }
}

impl NoiseModel for Dropout {
    fn perturb(&mut self, value: &mut [f32], rng: &mut NoiseRng) -> Result<()> {
        for v in value.iter_mut() {
            if rng.bernoulli(self.p) {
                *v = 0.0;
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dropout"
    }
}
