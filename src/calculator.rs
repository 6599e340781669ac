//! Batch pricing
//!
//! ```rust,ignore
//! use shipquote::{Parcel, ShippingCostCalculator, ShippingSpeed};
//!
//! let breakdown = ShippingCostCalculator::new()
//!     .with_speed(ShippingSpeed::Expedited)
//!     .calculate(&[Parcel::new(5.0, 5.0, 5.0, 0.5)]);
//! assert_eq!(breakdown.total().to_string(), "6.00");
//! ```

use crate::breakdown::CostBreakdown;
use crate::classify::TierClassifier;
use crate::parcel::Parcel;
use crate::surcharge::{ShippingSpeed, Surcharge};
use tracing::info;

/// Prices batches of parcels at a configured shipping speed
///
/// The speed is the only state; `calculate` is otherwise a pure function of
/// its input.
#[derive(Debug, Clone, Default)]
pub struct ShippingCostCalculator {
    classifier: TierClassifier,
    speed: ShippingSpeed,
}

impl ShippingCostCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`configure`](Self::configure)
    pub fn with_speed(mut self, speed: ShippingSpeed) -> Self {
        self.configure(speed);
        self
    }

    pub fn configure(&mut self, speed: ShippingSpeed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> ShippingSpeed {
        self.speed
    }

    /// Classify each parcel in order, then apply the speed's surcharge.
    ///
    /// Parcels must have finite, non-negative fields (see
    /// [`Parcel::validate`]).
    pub fn calculate(&self, parcels: &[Parcel]) -> CostBreakdown {
        let items = parcels
            .iter()
            .map(|parcel| self.classifier.classify(parcel))
            .collect();

        let breakdown = Surcharge::from(self.speed).apply(CostBreakdown::new(items));

        info!(
            parcels = breakdown.len(),
            speed = %self.speed,
            total = %breakdown.total(),
            "priced shipment"
        );

        breakdown
    }
}
