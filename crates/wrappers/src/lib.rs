//! Environment wrappers that inject random noise into one channel.
//!
//! Each wrapper owns a noise model, an activation rate and its own seeded
//! random source. On every value crossing its channel it draws once: with
//! probability `noise_rate` the model perturbs the value, which is then
//! fitted back into the channel's domain. Otherwise the value passes through
//! untouched.
//!
//! Wrappers implement [`gym::Env`] themselves and nest freely. Every wrapper
//! uses its nesting depth as its random stream, so wrappers in one stack
//! reseeded with the same value still draw independent sequences.
//!
//! ```
//! use gym::{CartPole, Env};
//! use wrappers::{NoisyObservation, NoisyReward};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let env = NoisyObservation::gaussian(CartPole::new(), 0.1, 0.0, 0.05)?;
//! let mut env = NoisyReward::uniform_scale(env, 0.5, 0.9, 1.1)?.with_clip(0.0, 2.0)?;
//! let (obs, _) = env.reset(Some(333), None)?;
//! assert_eq!(obs.len(), 4);
//!
//! let step = env.step(&[1.0])?;
//! assert!((0.0..=2.0).contains(&step.reward));
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod clip;
pub mod config;
mod injector;
pub mod observation;
pub mod reward;

pub use action::NoisyAction;
pub use clip::{ensure_finite, fit, Domain};
pub use config::{LayerConfig, StackConfig};
pub use observation::NoisyObservation;
pub use reward::NoisyReward;
