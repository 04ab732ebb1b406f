use std::fmt::Debug;

use crate::error::Result;
use crate::rng::NoiseRng;

/// Produces a perturbed value from an input value and random draws.
///
/// `perturb` is deterministic given the state of `rng` and only advances its
/// draw sequence. Models never enforce domain bounds.
pub trait NoiseModel: Debug + Send {
    /// Perturb `value` in place.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::ShapeMismatch`](crate::NoiseError::ShapeMismatch)
    /// when the noise cannot be applied to a value of this length.
    fn perturb(&mut self, value: &mut [f32], rng: &mut NoiseRng) -> Result<()>;

    /// Observe a value leaving the wrapper, perturbed or not.
    fn record(&mut self, _value: &[f32]) {}

    /// Forget any per-episode memory.
    fn clear(&mut self) {}

    fn name(&self) -> &'static str;
}

impl<M: NoiseModel + ?Sized> NoiseModel for Box<M> {
    fn perturb(&mut self, value: &mut [f32], rng: &mut NoiseRng) -> Result<()> {
        (**self).perturb(value, rng)
    }

    fn record(&mut self, value: &[f32]) {
        (**self).record(value);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
