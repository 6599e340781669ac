//! Pricing table command

use super::util::{has_flag, positional_args};
use shipquote::*;

pub fn cmd_tiers(args: &[String]) -> Result<()> {
    let tiers = match positional_args(args).first() {
        Some(name) => vec![name.parse::<ParcelTier>()?],
        None => ParcelTier::ALL.to_vec(),
    };

    if has_flag(args, "--json") {
        let rows: Vec<_> = tiers
            .iter()
            .map(|tier| {
                let spec = tier.spec();
                serde_json::json!({
                    "tier": tier.description(),
                    "max_side_cm": spec.max_side_cm,
                    "max_weight_kg": spec.max_weight_kg,
                    "base_cost": spec.base_cost.to_string(),
                    "overage_per_kg": spec.overage_per_kg.to_string(),
                    "next": tier.next().map(|next| next.description()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<7} {:>13} {:>13} {:>9} {:>12}",
        "Tier", "Sides under", "Allowance", "Base", "Per extra kg"
    );
    for tier in tiers {
        let spec = tier.spec();
        let sides = spec
            .max_side_cm
            .map(|max| format!("{} cm", max))
            .unwrap_or_else(|| "any".to_string());
        println!(
            "{:<7} {:>13} {:>13} {:>9} {:>12}",
            tier.description(),
            sides,
            format!("{} kg", spec.max_weight_kg),
            spec.base_cost.to_string(),
            spec.overage_per_kg.to_string()
        );
    }
    println!();
    println!(
        "Parcels priced above {} by size are billed as Heavy.",
        ParcelTier::Heavy.spec().base_cost
    );

    Ok(())
}
