//! Noise on the reward channel.

use gym::{Channel, Env, Info, RenderFrame, Result, Space, Step};
use noise::{
    Factors, GaussianNoise, NoiseConfig, NoiseError, NoiseModel, UniformNoise, UniformScale,
};

use crate::clip::Domain;
use crate::injector::Injector;

/// Perturbs the scalar reward of every step.
///
/// Rewards are unbounded unless clip bounds are set with
/// [`NoisyReward::with_clip`].
#[derive(Debug)]
pub struct NoisyReward<E, M> {
    env: E,
    noise: Injector<M>,
    clip: Option<(f32, f32)>,
}

impl<E: Env, M: NoiseModel> NoisyReward<E, M> {
    #[must_use]
    pub fn new(env: E, config: NoiseConfig, model: M) -> Self {
        let noise = Injector::new(Channel::Reward, config, model, env.depth() + 1);
        Self {
            env,
            noise,
            clip: None,
        }
    }

    /// Clamp perturbed rewards into `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] when a bound is not finite or
    /// `low > high`.
    pub fn with_clip(mut self, low: f32, high: f32) -> noise::Result<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(NoiseError::InvalidConfig {
                param: "clip",
                message: format!("expected finite low <= high, got [{low}, {high}]"),
            });
        }
        self.clip = Some((low, high));
        Ok(self)
    }

    #[must_use]
    pub fn clip_bounds(&self) -> Option<(f32, f32)> {
        self.clip
    }

    #[must_use]
    pub fn noise_rate(&self) -> f64 {
        self.noise.config().noise_rate()
    }

    #[must_use]
    pub fn config(&self) -> &NoiseConfig {
        self.noise.config()
    }

    #[must_use]
    pub fn model(&self) -> &M {
        self.noise.model()
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.env
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    #[must_use]
    pub fn into_inner(self) -> (E, M) {
        (self.env, self.noise.into_model())
    }
}

impl<E: Env> NoisyReward<E, GaussianNoise> {
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] for an invalid rate or noise
    /// parameters.
    pub fn gaussian(env: E, noise_rate: f64, mean: f32, std: f32) -> noise::Result<Self> {
        Ok(Self::new(env, NoiseConfig::new(noise_rate)?, GaussianNoise::new(mean, std)?))
    }
}

impl<E: Env> NoisyReward<E, UniformNoise> {
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] for an invalid rate or bounds.
    pub fn uniform(env: E, noise_rate: f64, low: f32, high: f32) -> noise::Result<Self> {
        Ok(Self::new(env, NoiseConfig::new(noise_rate)?, UniformNoise::new(low, high)?))
    }

    /// Uniform reward noise over the reward default range `[-0.01, 0.01)`,
    /// a tenth of the range observations and actions default to.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] for an invalid rate.
    pub fn uniform_default(env: E, noise_rate: f64) -> noise::Result<Self> {
        let config = NoiseConfig::new(noise_rate)?;
        Ok(Self::new(env, config, UniformNoise::reward_default()))
    }
}

impl<E: Env> NoisyReward<E, UniformScale> {
    /// Rewards are scalars, so any factor count collapses to one draw.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] for an invalid rate or bounds.
    pub fn uniform_scale(env: E, noise_rate: f64, low: f32, high: f32) -> noise::Result<Self> {
        let model = UniformScale::new(low, high, Factors::Shared)?;
        Ok(Self::new(env, NoiseConfig::new(noise_rate)?, model))
    }
}

impl<E: Env, M: NoiseModel> Env for NoisyReward<E, M> {
    fn action_space(&self) -> &Space {
        self.env.action_space()
    }

    fn observation_space(&self) -> &Space {
        self.env.observation_space()
    }

    fn reset(&mut self, seed: Option<u64>, options: Option<&Info>) -> Result<(Vec<f32>, Info)> {
        self.noise.begin_episode(seed);
        let reset = self.env.reset(seed, options)?;
        self.noise.mark_ready();
        Ok(reset)
    }

    fn step(&mut self, action: &[f32]) -> Result<Step> {
        self.noise.ensure_ready()?;
        let mut step = self.env.step(action)?;
        let domain = match self.clip {
            Some((low, high)) => Domain::Range { low, high },
            None => Domain::Unbounded,
        };
        self.noise.inject(std::slice::from_mut(&mut step.reward), domain)?;
        Ok(step)
    }

    fn render(&self) -> Option<RenderFrame> {
        self.env.render()
    }

    fn close(&mut self) {
        self.env.close();
    }

    fn depth(&self) -> usize {
        self.env.depth() + 1
    }
}
