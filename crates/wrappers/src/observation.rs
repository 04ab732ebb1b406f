//! Noise on the observation channel.

use gym::{Channel, Env, Info, RenderFrame, Result, Space, Step};
use noise::{
    Dropout, Factors, GaussianNoise, Mixup, NoiseConfig, NoiseModel, UniformNoise, UniformScale,
};

use crate::clip::Domain;
use crate::injector::Injector;

/// Perturbs every observation returned by `reset` and `step`.
///
/// Perturbed observations are clamped into the observation space, so
/// unbounded dimensions pass through while bounded ones stay in range.
#[derive(Debug)]
pub struct NoisyObservation<E, M> {
    env: E,
    noise: Injector<M>,
}

impl<E: Env, M: NoiseModel> NoisyObservation<E, M> {
    #[must_use]
    pub fn new(env: E, config: NoiseConfig, model: M) -> Self {
        let noise = Injector::new(Channel::Observation, config, model, env.depth() + 1);
        Self { env, noise }
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

    fn perturb(&mut self, observation: &mut [f32]) -> Result<()> {
        self.noise.inject(observation, Domain::Space(self.env.observation_space()))?;
        Ok(())
    }
}

impl<E: Env> NoisyObservation<E, GaussianNoise> {
    /// # Errors
    ///
    /// Returns [`noise::NoiseError::InvalidConfig`] for an invalid rate or
    /// noise parameters.
    pub fn gaussian(env: E, noise_rate: f64, mean: f32, std: f32) -> noise::Result<Self> {
        Ok(Self::new(env, NoiseConfig::new(noise_rate)?, GaussianNoise::new(mean, std)?))
    }
}

impl<E: Env> NoisyObservation<E, UniformNoise> {
    /// # Errors
    ///
    /// Returns [`noise::NoiseError::InvalidConfig`] for an invalid rate or
    /// bounds.
    pub fn uniform(env: E, noise_rate: f64, low: f32, high: f32) -> noise::Result<Self> {
        Ok(Self::new(env, NoiseConfig::new(noise_rate)?, UniformNoise::new(low, high)?))
    }
}

impl<E: Env> NoisyObservation<E, UniformScale> {
    /// # Errors
    ///
    /// Returns [`noise::NoiseError::InvalidConfig`] for an invalid rate,
    /// bounds or factor count.
    pub fn uniform_scale(
        env: E,
        noise_rate: f64,
        low: f32,
        high: f32,
        factors: Factors,
    ) -> noise::Result<Self> {
        Ok(Self::new(env, NoiseConfig::new(noise_rate)?, UniformScale::new(low, high, factors)?))
    }
}

impl<E: Env> NoisyObservation<E, Dropout> {
    /// Zero each element with probability `p` whenever noise fires.
    ///
    /// # Errors
    ///
    /// Returns [`noise::NoiseError::InvalidConfig`] unless both `noise_rate`
    /// and `p` lie in `[0, 1]`.
    pub fn dropout(env: E, noise_rate: f64, p: f64) -> noise::Result<Self> {
        Ok(Self::new(env, NoiseConfig::new(noise_rate)?, Dropout::new(p)?))
    }
}

impl<E: Env> NoisyObservation<E, Mixup> {
    /// Blend each observation with the previous one returned by this
    /// wrapper: `factor * current + (1 - factor) * previous`.
    ///
    /// # Errors
    ///
    /// Returns [`noise::NoiseError::InvalidConfig`] unless both `noise_rate`
    /// and `factor` lie in `[0, 1]`.
    pub fn mixup(env: E, noise_rate: f64, factor: f32) -> noise::Result<Self> {
        Ok(Self::new(env, NoiseConfig::new(noise_rate)?, Mixup::new(factor)?))
    }
}

impl<E: Env, M: NoiseModel> Env for NoisyObservation<E, M> {
    fn action_space(&self) -> &Space {
        self.env.action_space()
    }

    fn observation_space(&self) -> &Space {
        self.env.observation_space()
    }

    fn reset(&mut self, seed: Option<u64>, options: Option<&Info>) -> Result<(Vec<f32>, Info)> {
        self.noise.begin_episode(seed);
        let (mut observation, info) = self.env.reset(seed, options)?;
        self.perturb(&mut observation)?;
        self.noise.mark_ready();
        Ok((observation, info))
    }

    fn step(&mut self, action: &[f32]) -> Result<Step> {
        self.noise.ensure_ready()?;
        let mut step = self.env.step(action)?;
        self.perturb(&mut step.observation)?;
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
