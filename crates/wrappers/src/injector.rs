//! Per-wrapper noise state shared by the three channel wrappers.

use gym::{Channel, EnvError, Result};
use noise::{NoiseConfig, NoiseModel, NoiseRng};

use crate::clip::{self, Domain};

/// Owns one wrapper's model and random source and applies the activation
/// rule to each value crossing the wrapper.
#[derive(Debug)]
pub(crate) struct Injector<M> {
    channel: Channel,
    config: NoiseConfig,
    model: M,
    rng: NoiseRng,
    ready: bool,
}

impl<M: NoiseModel> Injector<M> {
    /// `stream` must differ between wrappers of one stack so that a shared
    /// reset seed still yields independent draws.
    pub(crate) fn new(channel: Channel, config: NoiseConfig, model: M, stream: usize) -> Self {
        let stream = stream as u64;
        let rng = match config.seed() {
            Some(seed) => NoiseRng::with_stream(seed, stream),
            None => NoiseRng::from_entropy(stream),
        };
        Self {
            channel,
            config,
            model,
            rng,
            ready: false,
        }
    }

    pub(crate) fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub(crate) fn model(&self) -> &M {
        &self.model
    }

    pub(crate) fn into_model(self) -> M {
        self.model
    }

    /// Start a new episode, reseeding when a seed is given.
    pub(crate) fn begin_episode(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.rng.reseed(seed);
            tracing::debug!(
                channel = %self.channel,
                seed,
                stream = self.rng.stream(),
                "noise source reseeded"
            );
        }
        self.model.clear();
        self.ready = false;
    }

    pub(crate) fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub(crate) fn ensure_ready(&self) -> Result<()> {
        if self.ready {
            Ok(())
        } else {
            Err(EnvError::ResetNeeded)
        }
    }

    /// Run one activation draw and, if it fires, perturb `value` and fit it
    /// back into `domain`. Returns whether noise was applied.
    pub(crate) fn inject(&mut self, value: &mut [f32], domain: Domain<'_>) -> Result<bool> {
        let active = self.rng.activate(self.config.noise_rate());
        if active {
            self.model
                .perturb(value, &mut self.rng)
                .map_err(|e| clip::channel_error(self.channel, e))?;
            clip::fit(self.channel, value, domain)?;
            tracing::trace!(channel = %self.channel, model = self.model.name(), "noise applied");
        }
        self.model.record(value);
        Ok(active)
    }
}
