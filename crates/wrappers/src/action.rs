//! Noise on the action channel.

use gym::{Channel, Env, Info, RenderFrame, Result, Space, Step};
use noise::{Factors, GaussianNoise, NoiseConfig, NoiseModel, UniformNoise, UniformScale};

use crate::clip::Domain;
use crate::injector::Injector;

/// Perturbs each action before it reaches the wrapped environment.
///
/// A perturbed action is fitted back into the action space: clamped for box
/// spaces, rounded and clamped for discrete ones. The caller's action is
/// never modified.
#[derive(Debug)]
pub struct NoisyAction<E, M> {
    env: E,
    noise: Injector<M>,
}

impl<E: Env, M: NoiseModel> NoisyAction<E, M> {
    #[must_use]
    pub fn new(env: E, config: NoiseConfig, model: M) -> Self {
        let noise = Injector::new(Channel::Action, config, model, env.depth() + 1);
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

    /// Unwrap into the environment and the noise model.
    #[must_use]
    pub fn into_inner(self) -> (E, M) {
        (self.env, self.noise.into_model())
    }
}

impl<E: Env> NoisyAction<E, GaussianNoise> {
    /// # Errors
    ///
    /// Returns [`noise::NoiseError::InvalidConfig`] for an invalid rate or
    /// noise parameters.
    pub fn gaussian(env: E, noise_rate: f64, mean: f32, std: f32) -> noise::Result<Self> {
        Ok(Self::new(env, NoiseConfig::new(noise_rate)?, GaussianNoise::new(mean, std)?))
    }
}

impl<E: Env> NoisyAction<E, UniformNoise> {
    /// # Errors
    ///
    /// Returns [`noise::NoiseError::InvalidConfig`] for an invalid rate or
    /// bounds.
    pub fn uniform(env: E, noise_rate: f64, low: f32, high: f32) -> noise::Result<Self> {
        Ok(Self::new(env, NoiseConfig::new(noise_rate)?, UniformNoise::new(low, high)?))
    }
}

impl<E: Env> NoisyAction<E, UniformScale> {
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

impl<E: Env, M: NoiseModel> Env for NoisyAction<E, M> {
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
        let mut action = action.to_vec();
        self.noise.inject(&mut action, Domain::Space(self.env.action_space()))?;
        self.env.step(&action)
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
