//! Shipping speed and the batch surcharge it implies

use crate::breakdown::CostBreakdown;
use crate::error::Error;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Requested delivery speed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ShippingSpeed {
    #[default]
    Normal,
    #[serde(alias = "speedy", alias = "express")]
    Expedited,
}

impl fmt::Display for ShippingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShippingSpeed::Normal => f.write_str("normal"),
            ShippingSpeed::Expedited => f.write_str("expedited"),
        }
    }
}

impl FromStr for ShippingSpeed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "standard" => Ok(ShippingSpeed::Normal),
            "expedited" | "speedy" | "express" => Ok(ShippingSpeed::Expedited),
            _ => Err(Error::UnknownSpeed(s.to_string())),
        }
    }
}

/// Additive batch modifier applied after every parcel is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surcharge {
    #[default]
    None,
    /// Charges the pre-surcharge total again, doubling the bill
    Expedited,
}

impl Surcharge {
    /// Surcharge owed on a breakdown's line items
    pub fn amount(self, breakdown: &CostBreakdown) -> Decimal {
        match self {
            Surcharge::None => Decimal::ZERO,
            Surcharge::Expedited => breakdown.subtotal(),
        }
    }

    /// Set the breakdown's surcharge. Line items are not touched.
    pub fn apply(self, mut breakdown: CostBreakdown) -> CostBreakdown {
        let amount = self.amount(&breakdown);
        debug!(surcharge = ?self, amount = %amount, "applying surcharge");
        breakdown.set_surcharge(amount);
        breakdown
    }
}

impl From<ShippingSpeed> for Surcharge {
    fn from(speed: ShippingSpeed) -> Self {
        match speed {
            ShippingSpeed::Normal => Surcharge::None,
            ShippingSpeed::Expedited => Surcharge::Expedited,
        }
    }
}
