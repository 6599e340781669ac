//! Property-based tests for pricing
//!
//! Uses proptest to generate random parcel batches and check invariants

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shipquote::{Parcel, ParcelTier, ShippingCostCalculator, ShippingSpeed, TierClassifier};

proptest! {
    #[test]
    fn test_small_parcels_within_allowance_cost_three(
        (w, d, h) in (0.0..10.0f64, 0.0..10.0f64, 0.0..10.0f64),
        weight in 0.0..=1.0f64,
    ) {
        let item = TierClassifier::new().classify(&Parcel::new(w, d, h, weight));
        prop_assert_eq!(item.tier, ParcelTier::Small);
        prop_assert_eq!(item.cost, dec!(3.00));
    }

    #[test]
    fn test_small_overage_is_per_started_kg(
        (w, d, h) in (0.0..10.0f64, 0.0..10.0f64, 0.0..10.0f64),
        whole_kg in 0u32..23,
        fraction in 0.01..=0.99f64,
    ) {
        // Overweight by whole_kg + fraction, charged as whole_kg + 1
        let weight = 1.0 + f64::from(whole_kg) + fraction;
        let item = TierClassifier::new().classify(&Parcel::new(w, d, h, weight));
        prop_assert_eq!(item.cost, dec!(3.00) + Decimal::from(whole_kg + 1) * dec!(2.00));
    }

    #[test]
    fn test_classification_is_total(parcel in any_parcel()) {
        let item = TierClassifier::new().classify(&parcel);
        prop_assert!(item.cost >= dec!(3.00));
        prop_assert_eq!(item.cost.scale(), 2);
    }

    #[test]
    fn test_cost_over_heavy_base_is_always_heavy(parcel in any_parcel()) {
        let item = TierClassifier::new().classify(&parcel);
        if item.cost > dec!(50.00) {
            prop_assert_eq!(item.tier, ParcelTier::Heavy);
        }
        if item.tier != ParcelTier::Heavy {
            prop_assert!(item.size_tier.fits(&parcel));
            prop_assert!(!item.is_escalated());
        }
    }

    #[test]
    fn test_expedited_doubles_total(batch in prop::collection::vec(any_parcel(), 0..12)) {
        let normal = ShippingCostCalculator::new().calculate(&batch);
        let expedited = ShippingCostCalculator::new()
            .with_speed(ShippingSpeed::Expedited)
            .calculate(&batch);

        let sum: Decimal = normal.items().iter().map(|item| item.cost).sum();
        prop_assert_eq!(normal.total(), sum);
        prop_assert_eq!(normal.surcharge(), Decimal::ZERO);
        prop_assert_eq!(expedited.surcharge(), sum);
        prop_assert_eq!(expedited.total(), sum * dec!(2));
    }

    #[test]
    fn test_order_is_preserved(batch in prop::collection::vec(any_parcel(), 0..12)) {
        let classifier = TierClassifier::new();
        let breakdown = ShippingCostCalculator::new().calculate(&batch);

        prop_assert_eq!(breakdown.len(), batch.len());
        for (parcel, item) in batch.iter().zip(breakdown.items()) {
            prop_assert_eq!(&classifier.classify(parcel), item);
        }
    }

    #[test]
    fn test_calculate_is_pure(batch in prop::collection::vec(any_parcel(), 0..12)) {
        let calculator = ShippingCostCalculator::new().with_speed(ShippingSpeed::Expedited);
        prop_assert_eq!(calculator.calculate(&batch), calculator.calculate(&batch));
    }
}

fn any_parcel() -> impl Strategy<Value = Parcel> {
    (
        0.0..300.0f64,
        0.0..300.0f64,
        0.0..300.0f64,
        0.0..200.0f64,
    )
        .prop_map(|(width, depth, height, weight)| Parcel::new(width, depth, height, weight))
}
