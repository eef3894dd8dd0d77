use std::str::FromStr;

/// A validated positive length entered by the user.
///
/// A measurement is always finite and strictly greater than zero. It is
/// transient: it exists only for the duration of one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement(f64);

impl Measurement {
    /// Creates a measurement from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::NotFinite`] if `value` is NaN or
    /// infinite, and [`MeasurementError::NotPositive`] if it is zero or
    /// negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use areal_core::{Measurement, MeasurementError};
    ///
    /// assert!(Measurement::new(2.5).is_ok());
    /// assert_eq!(Measurement::new(0.0), Err(MeasurementError::NotPositive));
    /// assert_eq!(Measurement::new(f64::NAN), Err(MeasurementError::NotFinite));
    /// ```
    pub fn new(value: f64) -> Result<Self, MeasurementError> {
        if !value.is_finite() {
            return Err(MeasurementError::NotFinite);
        }
        if value <= 0.0 {
            return Err(MeasurementError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    #[must_use]
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Measurement {
    type Err = MeasurementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| MeasurementError::NotNumeric)?;
        Self::new(value)
    }
}

/// Reasons a user-supplied value is not a valid [`Measurement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MeasurementError {
    /// The text did not parse as a number.
    #[display("value is not a number")]
    NotNumeric,
    /// The value is NaN or infinite.
    #[display("value is not finite")]
    NotFinite,
    /// The value is zero or negative.
    #[display("value must be greater than zero")]
    NotPositive,
}
