//! Fitting perturbed values back into a channel's declared domain.

use gym::{Channel, EnvError, Result, Space};
use noise::NoiseError;

/// Where a channel's values must lie after noise injection.
#[derive(Debug, Clone, Copy)]
pub enum Domain<'a> {
    Space(&'a Space),
    Range { low: f32, high: f32 },
    Unbounded,
}

/// Validate `value` and clamp it into `domain`.
///
/// Box spaces clamp element-wise. Discrete spaces round to the nearest
/// integer, then clamp into the valid range.
///
/// # Errors
///
/// [`EnvError::NonFinite`] for NaN or infinite elements and
/// [`EnvError::ShapeMismatch`] when the length differs from the space.
#[allow(clippy::cast_precision_loss)]
pub fn fit(channel: Channel, value: &mut [f32], domain: Domain<'_>) -> Result<()> {
    ensure_finite(channel, value)?;
    match domain {
        Domain::Space(space) => {
            let expected = space.flat_len();
            if value.len() != expected {
                return Err(EnvError::ShapeMismatch {
                    channel,
                    expected,
                    actual: value.len(),
                });
            }
            match space {
                Space::Box(b) => {
                    for ((v, &low), &high) in value.iter_mut().zip(b.low()).zip(b.high()) {
                        *v = v.clamp(low, high);
                    }
                }
                Space::Discrete(d) => {
                    let (first, last) = (d.start() as f32, d.last() as f32);
                    for v in value.iter_mut() {
                        *v = v.round().clamp(first, last);
                    }
                }
            }
        }
        Domain::Range { low, high } => {
            for v in value.iter_mut() {
                *v = v.clamp(low, high);
            }
        }
        Domain::Unbounded => {}
    }
    Ok(())
}

/// # Errors
///
/// [`EnvError::NonFinite`] naming the first offending element.
pub fn ensure_finite(channel: Channel, value: &[f32]) -> Result<()> {
    match value.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(EnvError::NonFinite { channel, index }),
        None => Ok(()),
    }
}

/// Tag a noise-model failure with the channel it happened on.
pub(crate) fn channel_error(channel: Channel, err: NoiseError) -> EnvError {
    match err {
        NoiseError::ShapeMismatch { expected, actual } => EnvError::ShapeMismatch {
            channel,
            expected,
            actual,
        },
        other => EnvError::Noise {
            channel,
            message: other.to_string(),
        },
    }
}
