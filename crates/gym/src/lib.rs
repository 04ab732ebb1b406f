//! Environment protocol shared by base environments and noise wrappers.
//!
//! Any type implementing [`Env`] can be wrapped, and every wrapper is itself
//! an [`Env`], so decorators stack transparently. Two reference
//! environments, [`CartPole`] and [`Pendulum`], follow the classic
//! Gymnasium dynamics and are used to exercise wrappers.

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cartpole;
pub mod env;
pub mod error;
pub mod pendulum;
pub mod space;

pub use cartpole::CartPole;
pub use env::{Channel, Env, Info, RenderFrame, Step};
pub use error::{EnvError, Result};
pub use pendulum::Pendulum;
pub use space::{BoxSpace, Discrete, Space};
