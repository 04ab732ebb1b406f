//! Space descriptors for actions and observations.
//!
//! A [`Space`] describes the valid domain of a channel. Values are flat
//! `f32` slices: a [`BoxSpace`] value has one element per bound, a
//! [`Discrete`] value is a single element holding an integer.
//!
//! Both space types deserialize through their validating constructors, so a
//! space read from a file upholds the same invariants as one built in code.

use rand::Rng;
use rand_distr::{Distribution, Exp1, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::error::{EnvError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Space {
    Box(BoxSpace),
    Discrete(Discrete),
}

impl Space {
    /// Number of `f32` elements in a value of this space.
    #[must_use]
    pub fn flat_len(&self) -> usize {
        match self {
            Space::Box(b) => b.len(),
            Space::Discrete(_) => 1,
        }
    }

    /// Whether `value` is a member of this space.
    #[must_use]
    pub fn contains(&self, value: &[f32]) -> bool {
        match self {
            Space::Box(b) => b.contains(value),
            Space::Discrete(d) => d.contains(value),
        }
    }

    /// Draw a random member of this space.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f32> {
        match self {
            Space::Box(b) => b.sample(rng),
            Space::Discrete(d) => vec![d.sample(rng)],
        }
    }
}

/// Continuous space bounded per element by `low` and `high`.
///
/// Bounds at `±f32::MAX` (or infinite) mark an unbounded component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoxSpace")]
pub struct BoxSpace {
    low: Vec<f32>,
    high: Vec<f32>,
    shape: Vec<usize>,
}

#[derive(Deserialize)]
struct RawBoxSpace {
    low: Vec<f32>,
    high: Vec<f32>,
    #[serde(default)]
    shape: Option<Vec<usize>>,
}

impl TryFrom<RawBoxSpace> for BoxSpace {
    type Error = EnvError;

    fn try_from(raw: RawBoxSpace) -> Result<Self> {
        match raw.shape {
            Some(shape) => Self::with_shape(raw.low, raw.high, shape),
            None => Self::new(raw.low, raw.high),
        }
    }
}

impl BoxSpace {
    /// Creates a flat box from per-element bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidSpace`] if the bounds differ in length,
    /// contain NaN, or `low > high` for any element.
    pub fn new(low: Vec<f32>, high: Vec<f32>) -> Result<Self> {
        let shape = vec![low.len()];
        Self::with_shape(low, high, shape)
    }

    /// Creates a box whose flat bounds are laid out in `shape`.
    ///
    /// # Errors
    ///
    /// Same as [`BoxSpace::new`], plus a shape whose product differs from the
    /// number of bounds.
    pub fn with_shape(low: Vec<f32>, high: Vec<f32>, shape: Vec<usize>) -> Result<Self> {
        if low.len() != high.len() {
            return Err(EnvError::InvalidSpace(format!(
                "{} lower bounds but {} upper bounds",
                low.len(),
                high.len()
            )));
        }
        if shape.iter().product::<usize>() != low.len() {
            return Err(EnvError::InvalidSpace(format!(
                "shape {shape:?} does not hold {} elements",
                low.len()
            )));
        }
        for (i, (&l, &h)) in low.iter().zip(&high).enumerate() {
            if l.is_nan() || h.is_nan() || l > h {
                return Err(EnvError::InvalidSpace(format!(
                    "element {i}: bounds [{l}, {h}]"
                )));
            }
        }
        Ok(Self { low, high, shape })
    }

    /// Creates a box of `len` elements sharing the same bounds.
    ///
    /// # Errors
    ///
    /// Same as [`BoxSpace::new`].
    pub fn uniform(len: usize, low: f32, high: f32) -> Result<Self> {
        Self::new(vec![low; len], vec![high; len])
    }

    /// Box spanning `[-high, high]` per element. Every bound in `high` must
    /// be non-negative.
    pub(crate) fn symmetric(high: Vec<f32>) -> Self {
        let low = high.iter().map(|h| -h).collect();
        let shape = vec![high.len()];
        Self { low, high, shape }
    }

    #[must_use]
    pub fn low(&self) -> &[f32] {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &[f32] {
        &self.high
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.low.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    #[must_use]
    pub fn contains(&self, value: &[f32]) -> bool {
        value.len() == self.len()
            && value
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (l, h))| v >= l && v <= h)
    }

    /// Uniform within bounded components, a shifted exponential on
    /// half-bounded ones and a standard normal on unbounded ones.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f32> {
        self.low
            .iter()
            .zip(&self.high)
            .map(|(&l, &h)| match (unbounded(l), unbounded(h)) {
                (false, false) => rng.gen::<f32>() * (h - l) + l,
                (false, true) => l + Distribution::<f32>::sample(&Exp1, rng),
                (true, false) => h - Distribution::<f32>::sample(&Exp1, rng),
                (true, true) => Distribution::<f32>::sample(&StandardNormal, rng),
            })
            .collect()
    }
}

/// Finite set of `n` integers starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDiscrete")]
pub struct Discrete {
    n: u32,
    start: i64,
}

#[derive(Deserialize)]
struct RawDiscrete {
    n: u32,
    #[serde(default)]
    start: i64,
}

impl TryFrom<RawDiscrete> for Discrete {
    type Error = EnvError;

    fn try_from(raw: RawDiscrete) -> Result<Self> {
        Self::with_start(raw.n, raw.start)
    }
}

impl Discrete {
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidSpace`] when `n` is zero.
    pub fn new(n: u32) -> Result<Self> {
        Self::with_start(n, 0)
    }

    /// # Errors
    ///
    /// Returns [`EnvError::InvalidSpace`] when `n` is zero or the last value
    /// overflows `i64`.
    pub fn with_start(n: u32, start: i64) -> Result<Self> {
        if n == 0 {
            return Err(EnvError::InvalidSpace(
                "discrete space needs at least one value".into(),
            ));
        }
        if start.checked_add(i64::from(n) - 1).is_none() {
            return Err(EnvError::InvalidSpace(format!(
                "{n} values starting at {start} overflow"
            )));
        }
        Ok(Self { n, start })
    }

    /// The two-valued space `{0, 1}`.
    #[must_use]
    pub const fn binary() -> Self {
        Self { n: 2, start: 0 }
    }

    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Largest member of the space.
    #[must_use]
    pub fn last(&self) -> i64 {
        self.start + i64::from(self.n) - 1
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(&self, value: &[f32]) -> bool {
        match value {
            [v] => v.fract() == 0.0 && (self.start as f32..=self.last() as f32).contains(v),
            _ => false,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.start..=self.last()) as f32
    }
}

fn unbounded(bound: f32) -> bool {
    bound.is_infinite() || bound.abs() >= f32::MAX
}
