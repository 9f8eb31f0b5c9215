use thiserror::Error;

/// Error raised by indicator constructors for invalid parameters.
///
/// Parameter validation is fail-fast: a bad period or multiplier is
/// rejected before any computation, never silently clamped. Running a
/// valid indicator over a too-short series is *not* an error — it
/// produces NaN-filled output instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// A period or span parameter was zero.
    #[error("{name} must be at least 1, got {value}")]
    InvalidPeriod {
        /// Parameter name as documented by the indicator.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// A band multiplier was zero, negative, or NaN.
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidMultiplier {
        /// Parameter name as documented by the indicator.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

pub(crate) fn require_period(name: &'static str, value: usize) -> Result<usize, IndicatorError> {
    if value == 0 {
        Err(IndicatorError::InvalidPeriod { name, value })
    } else {
        Ok(value)
    }
}
