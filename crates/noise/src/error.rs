use thiserror::Error;

/// Result type for noise construction and perturbation.
pub type Result<T> = std::result::Result<T, NoiseError>;

#[derive(Error, Debug)]
pub enum NoiseError {
    #[error("invalid configuration for '{param}': {message}")]
    InvalidConfig {
        param: &'static str,
        message: String,
    },
    #[error("noise shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("malformed noise configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl NoiseError {
    pub(crate) fn invalid(param: &'static str, message: impl Into<String>) -> Self {
        NoiseError::InvalidConfig {
            param,
            message: message.into(),
        }
    }
}

/// Rejects NaN and infinite parameters.
pub(crate) fn check_finite(param: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NoiseError::invalid(param, format!("must be finite, got {value}")))
    }
}

/// Rejects probabilities outside `[0, 1]`.
pub(crate) fn check_probability(param: &'static str, value: f64) -> Result<()> {
    check_finite(param, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(NoiseError::invalid(param, format!("must lie in [0, 1], got {value}")))
    }
}

/// Rejects distribution bounds with `low > high` or a width that overflows
/// `f32`.
pub(crate) fn check_range(low: f32, high: f32) -> Result<()> {
    check_finite("low", f64::from(low))?;
    check_finite("high", f64::from(high))?;
    if low > high {
        return Err(NoiseError::invalid("low", format!("{low} exceeds high {high}")));
    }
    if !(high - low).is_finite() {
        return Err(NoiseError::invalid(
            "high",
            format!("span from {low} to {high} overflows"),
        ));
    }
    Ok(())
}
