//! Tier classification
//!
//! Walks the size chain Small → Medium → Large → XL and prices the parcel at
//! the first tier it fits. When that price is above Heavy's base cost, the
//! parcel is repriced as Heavy regardless of its size.

use crate::breakdown::CostLineItem;
use crate::parcel::Parcel;
use crate::tier::ParcelTier;
use tracing::debug;

/// Selects the pricing tier for a single parcel
#[derive(Debug, Clone, Copy, Default)]
pub struct TierClassifier;

impl TierClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Price one parcel. Total for any parcel meeting the [`Parcel`]
    /// precondition.
    pub fn classify(&self, parcel: &Parcel) -> CostLineItem {
        let escalation_threshold = ParcelTier::Heavy.spec().base_cost;
        let mut tier = Some(ParcelTier::Small);

        while let Some(current) = tier {
            if !current.fits(parcel) {
                tier = current.next();
                continue;
            }

            let cost = current.cost(parcel);

            if cost > escalation_threshold && current != ParcelTier::Heavy {
                let heavy_cost = ParcelTier::Heavy.cost(parcel);
                debug!(
                    size_tier = %current,
                    size_cost = %cost,
                    heavy_cost = %heavy_cost,
                    weight_kg = parcel.weight,
                    "escalating parcel to Heavy"
                );
                return CostLineItem::escalated(current, heavy_cost);
            }

            debug!(tier = %current, cost = %cost, "classified parcel");
            return CostLineItem::new(current, cost);
        }

        unreachable!("size chain ended without an unbounded tier")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn classify(parcel: Parcel) -> CostLineItem {
        TierClassifier::new().classify(&parcel)
    }

    #[test]
    fn test_smallest_fitting_tier_wins() {
        let item = classify(Parcel::with_dimensions(9.9, 9.9, 9.9));
        assert_eq!(item.tier, ParcelTier::Small);
        assert_eq!(item.cost, dec!(3.00));
        assert!(!item.is_escalated());
    }

    #[test]
    fn test_boundary_falls_through() {
        assert_eq!(classify(Parcel::with_dimensions(1.0, 1.0, 10.0)).tier, ParcelTier::Medium);
        assert_eq!(classify(Parcel::with_dimensions(1.0, 50.0, 1.0)).tier, ParcelTier::Large);
        assert_eq!(classify(Parcel::with_dimensions(100.0, 1.0, 1.0)).tier, ParcelTier::Xl);
    }

    #[test]
    fn test_escalates_when_over_heavy_base() {
        // Small: 3.00 + 24 * 2.00 = 51.00
        let item = classify(Parcel::new(1.0, 1.0, 1.0, 24.5));
        assert_eq!(item.tier, ParcelTier::Heavy);
        assert_eq!(item.size_tier, ParcelTier::Small);
        assert_eq!(item.cost, dec!(50.00));
        assert!(item.is_escalated());
    }

    #[test]
    fn test_exactly_heavy_base_does_not_escalate() {
        // Medium: 8.00 + 21 * 2.00 = 50.00
        let item = classify(Parcel::new(20.0, 20.0, 20.0, 24.0));
        assert_eq!(item.tier, ParcelTier::Medium);
        assert_eq!(item.cost, dec!(50.00));
    }

    #[test]
    fn test_escalated_parcel_pays_heavy_overage() {
        let item = classify(Parcel::new(200.0, 200.0, 200.0, 60.5));
        assert_eq!(item.tier, ParcelTier::Heavy);
        assert_eq!(item.size_tier, ParcelTier::Xl);
        assert_eq!(item.cost, dec!(61.00));
    }
}
