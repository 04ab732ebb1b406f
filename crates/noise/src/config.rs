//! Validated noise configuration.
//!
//! [`NoiseConfig`] carries the activation rate shared by every wrapper and
//! [`ModelSpec`] names a noise model with its parameters. Both deserialize
//! from JSON and are validated before a value is handed out, so a malformed
//! file fails at load rather than at the first step.

use serde::{Deserialize, Serialize};

use crate::additive::{GaussianNoise, UniformNoise};
use crate::dropout::Dropout;
use crate::error::{check_probability, Result};
use crate::mixup::Mixup;
use crate::model::NoiseModel;
use crate::scale::{Factors, UniformScale};

const DEFAULT_NOISE_RATE: f64 = 0.01;

/// Activation rate and optional construction seed of a wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNoiseConfig")]
pub struct NoiseConfig {
    noise_rate: f64,
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct RawNoiseConfig {
    noise_rate: f64,
    #[serde(default)]
    seed: Option<u64>,
}

impl TryFrom<RawNoiseConfig> for NoiseConfig {
    type Error = crate::NoiseError;

    fn try_from(raw: RawNoiseConfig) -> Result<Self> {
        let config = NoiseConfig::new(raw.noise_rate)?;
        Ok(match raw.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}

impl NoiseConfig {
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`](crate::NoiseError::InvalidConfig)
    /// unless `noise_rate` lies in `[0, 1]`.
    pub fn new(noise_rate: f64) -> Result<Self> {
        check_probability("noise_rate", noise_rate)?;
        Ok(Self {
            noise_rate,
            seed: None,
        })
    }

    /// Seed the wrapper's random source at construction.
    ///
    /// Without a seed the source starts from OS entropy until the first
    /// seeded reset.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn noise_rate(&self) -> f64 {
        self.noise_rate
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            noise_rate: DEFAULT_NOISE_RATE,
            seed: None,
        }
    }
}

/// A noise model and its parameters, as written in configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    Gaussian { mean: f32, std: f32 },
    Uniform { low: f32, high: f32 },
    UniformScale {
        low: f32,
        high: f32,
        #[serde(default)]
        factors: Factors,
    },
    Dropout { p: f64 },
    Mixup { factor: f32 },
}

impl ModelSpec {
    /// Build the model, validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`](crate::NoiseError::InvalidConfig)
    /// for out-of-range parameters.
    pub fn build(&self) -> Result<Box<dyn NoiseModel>> {
        let model: Box<dyn NoiseModel> = match *self {
            ModelSpec::Gaussian { mean, std } => Box::new(GaussianNoise::new(mean, std)?),
            ModelSpec::Uniform { low, high } => Box::new(UniformNoise::new(low, high)?),
            ModelSpec::UniformScale { low, high, factors } => {
                Box::new(UniformScale::new(low, high, factors)?)
            }
            ModelSpec::Dropout { p } => Box::new(Dropout::new(p)?),
            ModelSpec::Mixup { factor } => Box::new(Mixup::new(factor)?),
        };
        Ok(model)
    }

    /// Name reported by the model `build` returns.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ModelSpec::Gaussian { .. } => "gaussian",
            ModelSpec::Uniform { .. } => "uniform",
            ModelSpec::UniformScale { .. } => "uniform_scale",
            ModelSpec::Dropout { .. } => "dropout",
            ModelSpec::Mixup { .. } => "mixup",
        }
    }
}
