//! Cost line items and the per-batch breakdown
//!
//! Amounts are `rust_decimal::Decimal` and are always exposed with two
//! decimal places.

use crate::tier::ParcelTier;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fix an amount to exactly two decimal places (banker's rounding if it
/// carried more).
pub fn to_cents(amount: Decimal) -> Decimal {
    let mut cents = amount.round_dp(2);
    cents.rescale(2);
    cents
}

/// The priced result for one parcel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CostLineItem {
    /// Tier the parcel is billed at
    pub tier: ParcelTier,

    /// Tier the parcel fitted by size; differs from `tier` after escalation
    pub size_tier: ParcelTier,

    /// Cost in dollars
    #[schemars(with = "String")]
    pub cost: Decimal,
}

impl CostLineItem {
    pub fn new(tier: ParcelTier, cost: Decimal) -> Self {
        Self {
            tier,
            size_tier: tier,
            cost: to_cents(cost),
        }
    }

    /// A Heavy line item for a parcel that fitted `size_tier` by size
    pub fn escalated(size_tier: ParcelTier, cost: Decimal) -> Self {
        Self {
            tier: ParcelTier::Heavy,
            size_tier,
            cost: to_cents(cost),
        }
    }

    pub fn description(&self) -> &'static str {
        self.tier.description()
    }

    pub fn is_escalated(&self) -> bool {
        self.tier != self.size_tier
    }
}

/// Line items for one batch plus the surcharge
///
/// The total is always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "CostBreakdownRecord")]
pub struct CostBreakdown {
    items: Vec<CostLineItem>,
    surcharge: Decimal,
}

impl CostBreakdown {
    pub fn new(items: Vec<CostLineItem>) -> Self {
        Self {
            items,
            surcharge: Decimal::ZERO,
        }
    }

    /// Line items in input parcel order
    pub fn items(&self) -> &[CostLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn surcharge(&self) -> Decimal {
        to_cents(self.surcharge)
    }

    pub(crate) fn set_surcharge(&mut self, surcharge: Decimal) {
        self.surcharge = surcharge;
    }

    /// Sum of line item costs, before any surcharge
    pub fn subtotal(&self) -> Decimal {
        to_cents(self.items.iter().map(|item| item.cost).sum())
    }

    pub fn total(&self) -> Decimal {
        to_cents(self.subtotal() + self.surcharge)
    }

    /// Number of parcels billed at each tier
    pub fn count_by_tier(&self) -> BTreeMap<ParcelTier, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.tier).or_insert(0) += 1;
        }
        counts
    }

    /// Plain-text quote for terminals
    pub fn to_report(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Shipping quote: {} parcel(s)\n", self.len()));

        for (i, item) in self.items.iter().enumerate() {
            out.push_str(&format!(
                "  #{:<3} {:<7} {:>10}",
                i + 1,
                item.description(),
                item.cost.to_string()
            ));
            if item.is_escalated() {
                out.push_str(&format!("  (escalated from {})", item.size_tier));
            }
            out.push('\n');
        }

        out.push_str(&format!("Subtotal:  {:>10}\n", self.subtotal().to_string()));
        out.push_str(&format!("Surcharge: {:>10}\n", self.surcharge().to_string()));
        out.push_str(&format!("Total:     {:>10}\n", self.total().to_string()));

        out
    }
}

/// Serialized form of a [`CostBreakdown`], with derived amounts filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CostBreakdownRecord {
    pub items: Vec<CostLineItem>,
    #[schemars(with = "String")]
    pub subtotal: Decimal,
    #[schemars(with = "String")]
    pub surcharge: Decimal,
    #[schemars(with = "String")]
    pub total: Decimal,
}

impl From<CostBreakdown> for CostBreakdownRecord {
    fn from(breakdown: CostBreakdown) -> Self {
        Self {
            subtotal: breakdown.subtotal(),
            surcharge: breakdown.surcharge(),
            total: breakdown.total(),
            items: breakdown.items,
        }
    }
}
