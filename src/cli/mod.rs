//! CLI command implementations
//!
//! - `quote`: pricing commands (quote, classify)
//! - `tiers`: the pricing table
//! - `config`: schema output
//! - `util`: argument parsing and output helpers

pub mod config;
pub mod quote;
pub mod tiers;
pub mod util;

pub use config::cmd_schema;
pub use quote::{cmd_classify, cmd_quote};
pub use tiers::cmd_tiers;
