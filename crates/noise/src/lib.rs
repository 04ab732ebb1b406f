//! Noise models and the seeded random source they draw from.
//!
//! A [`NoiseModel`] perturbs a flat `f32` value in place using a
//! [`NoiseRng`]. Models produce raw noise only; keeping the result inside a
//! channel's domain is the caller's job. Every model validates its
//! parameters when constructed.

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod additive;
pub mod config;
pub mod dropout;
pub mod error;
pub mod mixup;
pub mod model;
pub mod rng;
pub mod scale;

pub use additive::{GaussianNoise, UniformNoise};
pub use config::{ModelSpec, NoiseConfig};
pub use dropout::Dropout;
pub use error::{NoiseError, Result};
pub use mixup::Mixup;
pub use model::NoiseModel;
pub use rng::NoiseRng;
pub use scale::{Factors, UniformScale};
