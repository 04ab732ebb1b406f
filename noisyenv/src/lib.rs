//! # noisyenv: noise injection for reinforcement learning environments
//!
//! ## Overview
//!
//! noisyenv decorates an environment with wrappers that randomly perturb one
//! of its three data channels: the actions going in, the observations coming
//! out, or the reward. Agents trained against a noisy stack have to cope with
//! sensor glitches, actuator slop and reward jitter without any change to the
//! environment itself.
//!
//! A wrapper is itself an environment, so wrappers nest freely:
//!
//! ```
//! use noisyenv::gym::{CartPole, Env};
//! use noisyenv::wrappers::{NoisyAction, NoisyObservation, NoisyReward};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let env = NoisyAction::gaussian(CartPole::new(), 0.05, 0.0, 0.3)?;
//! let env = NoisyObservation::dropout(env, 0.1, 0.25)?;
//! let mut env = NoisyReward::uniform_scale(env, 0.5, 0.9, 1.1)?;
//!
//! let (obs, _) = env.reset(Some(333), None)?;
//! assert_eq!(obs.len(), 4);
//! let mut steps = 0;
//! loop {
//!     let step = env.step(&[1.0])?;
//!     steps += 1;
//!     if step.done() {
//!         break;
//!     }
//! }
//! assert!(steps <= 500);
//! # Ok(())
//! # }
//! ```
//!
//! ## How noise is applied
//!
//! Every wrapper owns a [`noise::NoiseConfig`] (the activation rate), a
//! [`noise::NoiseModel`] and its own seeded random source. Each value crossing
//! the wrapper triggers one activation draw. With probability `noise_rate`
//! the model perturbs the value; otherwise it passes through bit for bit.
//! Perturbed actions and observations are fitted back into their spaces.
//! Rewards are clamped only when clip bounds are configured.
//!
//! The models are:
//!
//! -   **Gaussian** and **uniform** offsets, one draw per element.
//! -   **Uniform scaling** with a shared factor, one factor per element, or an
//!     exact factor count.
//! -   **Dropout**, zeroing elements with probability `p`.
//! -   **Mixup**, blending an observation with the previous one.
//!
//! ## Reproducibility
//!
//! Resetting with a seed reseeds every wrapper in the stack. Each wrapper
//! jumps ahead in that seed's sequence by its nesting depth, so layers never
//! share a random sequence and disabling one layer leaves the draws of the
//! layers below it intact.
//!
//! ## Configuration files
//!
//! Whole stacks can be described in JSON and built with
//! [`wrappers::StackConfig`]. Every layer is validated on load, so a bad rate
//! or an inverted range fails before any environment is touched.
//!
//! ## The Crates
//!
//! -   **[`gym`]:** The environment trait, spaces, step results and two
//!     reference environments (cart-pole and pendulum).
//! -   **[`noise`]:** Noise models, their validated configuration and the
//!     seeded random source.
//! -   **[`wrappers`]:** The action, observation and reward wrappers and the
//!     stack configuration.

pub use gym;
pub use noise;
pub use wrappers;
