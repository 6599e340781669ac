// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # shipquote - tiered parcel shipping costs
//!
//! Prices a batch of parcels from a fixed size/weight tier table, escalates
//! parcels whose weight penalty gets too large to a flat-rate Heavy tier,
//! and optionally adds an expedited-shipping surcharge.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shipquote::{Parcel, ShippingCostCalculator, ShippingSpeed};
//!
//! let parcels = [
//!     Parcel::new(1.0, 1.0, 1.0, 0.5),    // Small:  3.00
//!     Parcel::new(1.0, 1.0, 10.0, 0.0),   // Medium: 8.00
//!     Parcel::new(1.0, 1.0, 50.0, 0.0),   // Large: 15.00
//!     Parcel::new(1.0, 1.0, 100.0, 0.0),  // XL:    25.00
//! ];
//!
//! let breakdown = ShippingCostCalculator::new()
//!     .with_speed(ShippingSpeed::Expedited)
//!     .calculate(&parcels);
//!
//! assert_eq!(breakdown.surcharge().to_string(), "51.00");
//! assert_eq!(breakdown.total().to_string(), "102.00");
//! ```
//!
//! ## Pricing Rules
//!
//! | Tier   | Every side under | Weight allowance | Base  | Per extra kg |
//! |--------|------------------|------------------|-------|--------------|
//! | Small  | 10 cm            | 1 kg             | 3.00  | 2.00         |
//! | Medium | 50 cm            | 3 kg             | 8.00  | 2.00         |
//! | Large  | 100 cm           | 6 kg             | 15.00 | 2.00         |
//! | XL     | any              | 10 kg            | 25.00 | 2.00         |
//! | Heavy  | any              | 50 kg            | 50.00 | 1.00         |
//!
//! Extra weight is charged per started kilogram. A parcel whose size-tier
//! price comes out above 50.00 is billed as Heavy instead.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  ShipmentManifest (YAML / JSON)                             │
//! │       │                                                     │
//! │       └──► ShippingCostCalculator::calculate(parcels)       │
//! │                 │                                           │
//! │                 ├──► TierClassifier::classify(parcel)       │
//! │                 │        └──► CostLineItem (per parcel)     │
//! │                 │                                           │
//! │                 └──► Surcharge::apply(breakdown)            │
//! │                          └──► CostBreakdown                 │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// Pricing core
pub mod breakdown;
pub mod calculator;
pub mod classify;
pub mod parcel;
pub mod surcharge;
pub mod tier;

// Configuration and errors
pub mod error;
pub mod manifest;

// Re-exports
pub use breakdown::{to_cents, CostBreakdown, CostBreakdownRecord, CostLineItem};
pub use calculator::ShippingCostCalculator;
pub use classify::TierClassifier;
pub use error::{Error, Result};
pub use manifest::ShipmentManifest;
pub use parcel::Parcel;
pub use surcharge::{ShippingSpeed, Surcharge};
pub use tier::{ParcelTier, TierSpec};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
