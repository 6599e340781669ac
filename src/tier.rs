//! Parcel size tiers - the pricing table
//!
//! Every tier is a closed variant with constant parameters:
//!
//! | Tier   | Max side (cm) | Max weight (kg) | Base cost | Overage / kg |
//! |--------|---------------|-----------------|-----------|--------------|
//! | Small  | < 10          | 1               | 3.00      | 2.00         |
//! | Medium | < 50          | 3               | 8.00      | 2.00         |
//! | Large  | < 100         | 6               | 15.00     | 2.00         |
//! | XL     | unbounded     | 10              | 25.00     | 2.00         |
//! | Heavy  | unbounded     | 50              | 50.00     | 1.00         |
//!
//! Small through XL form the size chain walked by the classifier. Heavy sits
//! outside the chain and is only reached by escalation.

use crate::error::Error;
use crate::parcel::Parcel;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Constant pricing parameters of one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierSpec {
    /// Every side must be strictly below this; `None` accepts any size
    pub max_side_cm: Option<u32>,
    /// Weight allowance before overage applies
    pub max_weight_kg: u32,
    pub base_cost: Decimal,
    /// Charged per started kg above the allowance
    pub overage_per_kg: Decimal,
}

const SMALL: TierSpec = TierSpec {
    max_side_cm: Some(10),
    max_weight_kg: 1,
    base_cost: dec!(3.00),
    overage_per_kg: dec!(2.00),
};

const MEDIUM: TierSpec = TierSpec {
    max_side_cm: Some(50),
    max_weight_kg: 3,
    base_cost: dec!(8.00),
    overage_per_kg: dec!(2.00),
};

const LARGE: TierSpec = TierSpec {
    max_side_cm: Some(100),
    max_weight_kg: 6,
    base_cost: dec!(15.00),
    overage_per_kg: dec!(2.00),
};

const XL: TierSpec = TierSpec {
    max_side_cm: None,
    max_weight_kg: 10,
    base_cost: dec!(25.00),
    overage_per_kg: dec!(2.00),
};

const HEAVY: TierSpec = TierSpec {
    max_side_cm: None,
    max_weight_kg: 50,
    base_cost: dec!(50.00),
    overage_per_kg: dec!(1.00),
};

/// A pricing tier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum ParcelTier {
    Small,
    Medium,
    Large,
    #[serde(rename = "XL")]
    Xl,
    Heavy,
}

impl ParcelTier {
    /// All tiers, size chain first
    pub const ALL: [ParcelTier; 5] = [
        ParcelTier::Small,
        ParcelTier::Medium,
        ParcelTier::Large,
        ParcelTier::Xl,
        ParcelTier::Heavy,
    ];

    /// Tiers walked by size, smallest first
    pub const SIZE_CHAIN: [ParcelTier; 4] = [
        ParcelTier::Small,
        ParcelTier::Medium,
        ParcelTier::Large,
        ParcelTier::Xl,
    ];

    pub const fn spec(self) -> TierSpec {
        match self {
            ParcelTier::Small => SMALL,
            ParcelTier::Medium => MEDIUM,
            ParcelTier::Large => LARGE,
            ParcelTier::Xl => XL,
            ParcelTier::Heavy => HEAVY,
        }
    }

    /// Display name used in line items and reports
    pub const fn description(self) -> &'static str {
        match self {
            ParcelTier::Small => "Small",
            ParcelTier::Medium => "Medium",
            ParcelTier::Large => "Large",
            ParcelTier::Xl => "XL",
            ParcelTier::Heavy => "Heavy",
        }
    }

    /// Next tier up the size chain. XL is terminal by size and Heavy is not
    /// on the chain at all.
    pub const fn next(self) -> Option<ParcelTier> {
        match self {
            ParcelTier::Small => Some(ParcelTier::Medium),
            ParcelTier::Medium => Some(ParcelTier::Large),
            ParcelTier::Large => Some(ParcelTier::Xl),
            ParcelTier::Xl | ParcelTier::Heavy => None,
        }
    }

    /// True iff every side of the parcel is strictly below this tier's
    /// maximum side.
    pub fn fits(self, parcel: &Parcel) -> bool {
        match self.spec().max_side_cm {
            None => true,
            Some(max) => {
                let max = f64::from(max);
                parcel.dimensions().iter().all(|&side| side < max)
            }
        }
    }

    /// Kilograms charged as overage: the real excess rounded up to a whole
    /// kg. Negative when the parcel is under its allowance.
    ///
    /// The weight's exact binary value is carried into `Decimal`. Weights
    /// outside `Decimal`'s range saturate, and NaN or sub-precision values
    /// count as 0 kg.
    pub fn excess_weight_kg(self, parcel: &Parcel) -> Decimal {
        let weight = Decimal::from_f64_retain(parcel.weight).unwrap_or_else(|| {
            if parcel.weight.is_nan() || parcel.weight.abs() < 1.0 {
                Decimal::ZERO
            } else if parcel.weight > 0.0 {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        });

        weight
            .saturating_sub(Decimal::from(self.spec().max_weight_kg))
            .ceil()
    }

    /// Base cost plus overage for this parcel, ignoring size eligibility.
    pub fn cost(self, parcel: &Parcel) -> Decimal {
        let spec = self.spec();
        let excess = self.excess_weight_kg(parcel);

        if excess < Decimal::ZERO {
            return spec.base_cost;
        }

        spec.base_cost
            .saturating_add(excess.saturating_mul(spec.overage_per_kg))
    }
}

impl fmt::Display for ParcelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for ParcelTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" | "s" => Ok(ParcelTier::Small),
            "medium" | "m" => Ok(ParcelTier::Medium),
            "large" | "l" => Ok(ParcelTier::Large),
            "xl" | "extra_large" | "extra-large" => Ok(ParcelTier::Xl),
            "heavy" => Ok(ParcelTier::Heavy),
            _ => Err(Error::UnknownTier(s.to_string())),
        }
    }
}
