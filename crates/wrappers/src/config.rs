//! JSON description of a whole wrapper stack.
//!
//! ```json
//! {
//!   "layers": [
//!     { "channel": "observation", "noise": { "noise_rate": 0.1 },
//!       "model": { "kind": "gaussian", "mean": 0.0, "std": 0.05 } },
//!     { "channel": "reward", "noise": { "noise_rate": 0.5, "seed": 7 },
//!       "model": { "kind": "uniform", "low": -0.1, "high": 0.1 },
//!       "clip": [-1.0, 2.0] }
//!   ]
//! }
//! ```
//!
//! Layers are applied in order, so the first layer sits closest to the base
//! environment.

use gym::{Channel, Env};
use noise::{ModelSpec, NoiseConfig, NoiseError};
use serde::{Deserialize, Serialize};

use crate::{NoisyAction, NoisyObservation, NoisyReward};

/// One wrapper of a stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub channel: Channel,
    pub noise: NoiseConfig,
    pub model: ModelSpec,
    /// Reward clip bounds; only valid on the reward channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<[f32; 2]>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackConfig {
    pub layers: Vec<LayerConfig>,
}

impl StackConfig {
    /// Parse and validate a stack description.
    ///
    /// # Errors
    ///
    /// [`NoiseError::Malformed`] for invalid JSON and
    /// [`NoiseError::InvalidConfig`] for invalid parameters.
    pub fn from_json(json: &str) -> noise::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] for the first invalid layer.
    pub fn validate(&self) -> noise::Result<()> {
        for layer in &self.layers {
            layer.model.build()?;
            match (layer.channel, layer.clip) {
                (_, None) => {}
                (Channel::Reward, Some([low, high])) => check_clip(low, high)?,
                (channel, Some(_)) => {
                    return Err(NoiseError::InvalidConfig {
                        param: "clip",
                        message: format!("clip bounds apply to rewards only, not {channel}"),
                    })
                }
            }
        }
        Ok(())
    }

    /// Wrap `env` in every layer, innermost first.
    ///
    /// All layers are validated before any wrapping happens.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] for an invalid layer.
    pub fn wrap<E: Env + 'static>(&self, env: E) -> noise::Result<Box<dyn Env>> {
        self.validate()?;
        let mut env: Box<dyn Env> = Box::new(env);
        for layer in &self.layers {
            let model = layer.model.build()?;
            let wrapped: Box<dyn Env> = match layer.channel {
                Channel::Action => Box::new(NoisyAction::new(env, layer.noise, model)),
                Channel::Observation => Box::new(NoisyObservation::new(env, layer.noise, model)),
                Channel::Reward => {
                    let reward = NoisyReward::new(env, layer.noise, model);
                    match layer.clip {
                        Some([low, high]) => Box::new(reward.with_clip(low, high)?),
                        None => Box::new(reward),
                    }
                }
            };
            tracing::debug!(
                channel = %layer.channel,
                model = layer.model.name(),
                noise_rate = layer.noise.noise_rate(),
                depth = wrapped.depth(),
                "noise layer attached"
            );
            env = wrapped;
        }
        Ok(env)
    }
}

fn check_clip(low: f32, high: f32) -> noise::Result<()> {
    if low.is_finite() && high.is_finite() && low <= high {
        Ok(())
    } else {
        Err(NoiseError::InvalidConfig {
            param: "clip",
            message: format!("expected finite low <= high, got [{low}, {high}]"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_default_to_no_clip() {
        let config = StackConfig::from_json(
            r#"{"layers": [{"channel": "action", "noise": {"noise_rate": 0.2},
                "model": {"kind": "uniform", "low": -0.5, "high": 0.5}}]}"#,
        )
        .unwrap();
        assert_eq!(config.layers.len(), 1);
        assert_eq!(config.layers[0].channel, Channel::Action);
        assert_eq!(config.layers[0].clip, None);
    }

    #[test]
    fn clip_outside_reward_is_rejected() {
        let err = StackConfig::from_json(
            r#"{"layers": [{"channel": "observation", "noise": {"noise_rate": 0.2},
                "model": {"kind": "dropout", "p": 0.5}, "clip": [0.0, 1.0]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, NoiseError::InvalidConfig { param: "clip", .. }));
    }

    #[test]
    fn unknown_model_is_malformed() {
        let err = StackConfig::from_json(
            r#"{"layers": [{"channel": "reward", "noise": {"noise_rate": 0.2},
                "model": {"kind": "salt_and_pepper"}}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, NoiseError::Malformed(_)));
    }

    #[test]
    fn serializes_back_to_equal_config() {
        let config = StackConfig {
            layers: vec![LayerConfig {
                channel: Channel::Reward,
                noise: NoiseConfig::new(0.5).unwrap().with_seed(3),
                model: ModelSpec::Gaussian {
                    mean: 0.0,
                    std: 1.0,
                },
                clip: Some([-1.0, 1.0]),
            }],
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(StackConfig::from_json(&json).unwrap(), config);
    }
}
