use crate::error::{check_probability, NoiseError, Result};
use crate::model::NoiseModel;
use crate::rng::NoiseRng;

/// Blends a value with the previously recorded one:
/// `factor * value + (1 - factor) * last`.
///
/// Values pass unchanged until a previous value has been recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixup {
    factor: f32,
    last: Option<Vec<f32>>,
}

impl Mixup {
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] unless `factor` lies in `[0, 1]`.
    pub fn new(factor: f32) -> Result<Self> {
        check_probability("factor", f64::from(factor))?;
        Ok(Self { factor, last: None })
    }

    #[must_use]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// The value the next perturbation blends with.
    #[must_use]
    pub fn last(&self) -> Option<&[f32]> {
        self.last.as_deref()
    }
}

impl Default for Mixup {
    fn default() -> Self {
        Self {
            factor: 0.5,
            last: None,
        }
    }
}

impl NoiseModel for Mixup {
    fn perturb(&mut self, value: &mut [f32], _rng: &mut NoiseRng) -> Result<()> {
        let Some(last) = &self.last else {
            return Ok(());
        };
        if last.len() != value.len() {
            return Err(NoiseError::ShapeMismatch {
                expected: last.len(),
                actual: value.len(),
            });
        }
        for (v, l) in value.iter_mut().zip(last) {
            *v = self.factor * *v + (1.0 - self.factor) * l;
        }
        Ok(())
    }

    fn record(&mut self, value: &[f32]) {
        match &mut self.last {
            Some(last) => {
                last.clear();
                last.extend_from_slice(value);
            }
            None => self.last = Some(value.to_vec()),
        }
    }

    fn clear(&mut self) {
        self.last = None;
    }

    fn name(&self) -> &'static str {
        "mixup"
    }
}
