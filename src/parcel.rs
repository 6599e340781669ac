//! Parcel - the input value priced by the calculator
//!
//! Dimensions are in centimetres, weight in kilograms. The pricing core
//! assumes every field is finite and non-negative; use [`Parcel::validate`]
//! on untrusted input before pricing it.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single parcel in a shipment
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Parcel {
    /// Width in cm
    pub width: f64,

    /// Depth in cm
    pub depth: f64,

    /// Height in cm
    pub height: f64,

    /// Weight in kg (defaults to 0 when omitted)
    #[serde(default)]
    pub weight: f64,
}

impl Parcel {
    /// Heaviest weight accepted by [`validate`](Self::validate). Costs and
    /// batch totals stay exact to the cent below it.
    pub const MAX_WEIGHT_KG: f64 = 1.0e15;

    pub fn new(width: f64, depth: f64, height: f64, weight: f64) -> Self {
        Self {
            width,
            depth,
            height,
            weight,
        }
    }

    /// A weightless parcel, priced on size alone
    pub fn with_dimensions(width: f64, depth: f64, height: f64) -> Self {
        Self::new(width, depth, height, 0.0)
    }

    /// The three linear dimensions
    pub fn dimensions(&self) -> [f64; 3] {
        [self.width, self.depth, self.height]
    }

    /// Check the pricing precondition: every field finite and non-negative,
    /// and the weight at most [`MAX_WEIGHT_KG`](Self::MAX_WEIGHT_KG).
    ///
    /// `index` is the parcel's position in its batch and is only used for
    /// the error message.
    pub fn validate(&self, index: usize) -> Result<()> {
        let fields = [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
            ("weight", self.weight),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidParcel {
                    index,
                    reason: format!("{} must be a finite number, got {}", name, value),
                });
            }
            if value < 0.0 {
                return Err(Error::InvalidParcel {
                    index,
                    reason: format!("{} must not be negative, got {}", name, value),
                });
            }
        }

        if self.weight > Self::MAX_WEIGHT_KG {
            return Err(Error::InvalidParcel {
                index,
                reason: format!(
                    "weight must be at most {} kg, got {}",
                    Self::MAX_WEIGHT_KG,
                    self.weight
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_defaults_to_zero() {
        let parcel: Parcel = serde_json::from_str(r#"{"width":1,"depth":2,"height":3}"#).unwrap();
        assert_eq!(parcel, Parcel::with_dimensions(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_validate_accepts_zero() {
        assert!(Parcel::default().validate(0).is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let err = Parcel::new(1.0, 1.0, 1.0, -0.5).validate(3).unwrap_err();
        match err {
            Error::InvalidParcel { index, reason } => {
                assert_eq!(index, 3);
                assert!(reason.contains("weight"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_validate_weight_ceiling() {
        assert!(Parcel::new(1.0, 1.0, 1.0, Parcel::MAX_WEIGHT_KG).validate(0).is_ok());

        let err = Parcel::new(1.0, 1.0, 1.0, 1e20).validate(2).unwrap_err();
        match err {
            Error::InvalidParcel { index, reason } => {
                assert_eq!(index, 2);
                assert!(reason.contains("weight must be at most"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        let err = Parcel::new(f64::NAN, 1.0, 1.0, 1.0).validate(0).unwrap_err();
        assert!(err.to_string().contains("width must be a finite number"));
    }
}
