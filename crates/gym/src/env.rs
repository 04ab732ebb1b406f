use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::space::Space;

/// Auxiliary information returned by `reset` and `step`.
pub type Info = serde_json::Map<String, serde_json::Value>;

/// One of the three data flows of the interaction loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Action,
    Observation,
    Reward,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Action => "action",
            Channel::Observation => "observation",
            Channel::Reward => "reward",
        };
        f.write_str(name)
    }
}

/// Outcome of a single [`Env::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub observation: Vec<f32>,
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: Info,
}

impl Step {
    #[must_use]
    pub fn new(observation: Vec<f32>, reward: f32, terminated: bool, truncated: bool) -> Self {
        Self {
            observation,
            reward,
            terminated,
            truncated,
            info: Info::new(),
        }
    }

    /// Whether the episode ended, either terminated or truncated.
    #[must_use]
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// A frame returned by [`Env::render`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrame {
    Text(String),
}

/// Reinforcement learning environment trait.
///
/// Inspired by Gymnasium, this trait defines the step/reset protocol an
/// environment must provide. Each call to [`step`] advances the environment
/// by one action and returns the new observation, a scalar reward and the
/// termination and truncation signals.
///
/// Actions and observations are flat `f32` vectors. A discrete action is a
/// single element holding the integer value.
///
/// [`step`]: Env::step
pub trait Env {
    /// Descriptor of valid actions.
    fn action_space(&self) -> &Space;

    /// Descriptor of valid observations.
    fn observation_space(&self) -> &Space;

    /// Reset the environment and return the initial observation.
    ///
    /// Implementations re-seed their internal random state when `seed` is
    /// provided, so equal seeds give equal episodes.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvError`](crate::EnvError) if the environment cannot be
    /// reset.
    fn reset(&mut self, seed: Option<u64>, options: Option<&Info>) -> Result<(Vec<f32>, Info)>;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ResetNeeded`](crate::EnvError::ResetNeeded) when
    /// called before `reset`, or an error describing the rejected action.
    fn step(&mut self, action: &[f32]) -> Result<Step>;

    /// Render the current state, if supported.
    fn render(&self) -> Option<RenderFrame> {
        None
    }

    /// Release external resources.
    fn close(&mut self) {}

    /// Number of wrappers between the caller and the base environment.
    fn depth(&self) -> usize {
        0
    }
}

impl<E: Env + ?Sized> Env for Box<E> {
    fn action_space(&self) -> &Space {
        (**self).action_space()
    }

    fn observation_space(&self) -> &Space {
        (**self).observation_space()
    }

    fn reset(&mut self, seed: Option<u64>, options: Option<&Info>) -> Result<(Vec<f32>, Info)> {
        (**self).reset(seed, options)
    }

    fn step(&mut self, action: &[f32]) -> Result<Step> {
        (**self).step(action)
    }

    fn render(&self) -> Option<RenderFrame> {
        (**self).render()
    }

    fn close(&mut self) {
        (**self).close();
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}
