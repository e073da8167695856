//! Customer rating on a zero-to-five scale.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside `[0, 5]`.
    #[error("rating must be between 0 and 5 (got {0})")]
    OutOfRange(Decimal),
}

/// An average product rating in `[0, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(Decimal);

impl Rating {
    /// Highest possible rating.
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Create a rating from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if `value` is negative or above 5.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        if value < Decimal::ZERO || value > Self::MAX {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Create a rating from tenths of a star (`45` is `4.5`).
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if `tenths` is above 50.
    pub fn from_tenths(tenths: u8) -> Result<Self, RatingError> {
        Self::new(Decimal::new(i64::from(tenths), 1))
    }

    /// The rating value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Rating::new(Decimal::ZERO).is_ok());
        assert!(Rating::new(Rating::MAX).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            Rating::new(Decimal::new(51, 1)),
            Err(RatingError::OutOfRange(_))
        ));
        assert!(matches!(
            Rating::new(Decimal::new(-1, 1)),
            Err(RatingError::OutOfRange(_))
        ));
        assert!(Rating::from_tenths(51).is_err());
    }

    #[test]
    fn test_from_tenths_display() {
        assert_eq!(Rating::from_tenths(45).unwrap().to_string(), "4.5");
        assert_eq!(Rating::from_tenths(50).unwrap().to_string(), "5.0");
    }

    #[test]
    fn test_serializes_as_json_number() {
        let value = serde_json::to_value(Rating::from_tenths(47).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!(4.7));
    }
}
