//! Pricing commands: quote, classify

use super::util::{
    has_flag, parse_number, parse_output_arg, parse_speed_arg, positional_args, write_output,
};
use shipquote::*;
use std::path::Path;

pub fn cmd_quote(args: &[String]) -> Result<()> {
    let positional = positional_args(args);
    let Some(manifest_path) = positional.first() else {
        return Err("Usage: shipquote quote <manifest.yaml|json> [--speed <speed>] [--json]".into());
    };

    let json_output = has_flag(args, "--json");
    let output = parse_output_arg(args);

    let mut manifest = ShipmentManifest::load(Path::new(manifest_path))?;
    if let Some(speed) = parse_speed_arg(args)? {
        manifest.speed = speed;
    }

    let breakdown = manifest.quote();

    let content = if json_output {
        serde_json::to_string_pretty(&breakdown)?
    } else {
        format!("Speed: {}\n{}", manifest.speed, breakdown.to_report())
    };

    write_output(&output, &content)
}

pub fn cmd_classify(args: &[String]) -> Result<()> {
    let positional = positional_args(args);
    let [width, depth, height, weight] = positional.as_slice() else {
        return Err("Usage: shipquote classify <width> <depth> <height> <weight> [--json]".into());
    };

    let parcel = Parcel::new(
        parse_number("width", width)?,
        parse_number("depth", depth)?,
        parse_number("height", height)?,
        parse_number("weight", weight)?,
    );
    parcel.validate(0)?;

    let item = TierClassifier::new().classify(&parcel);

    if has_flag(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else if item.is_escalated() {
        println!(
            "{} {} (escalated from {})",
            item.description(),
            item.cost,
            item.size_tier
        );
    } else {
        println!("{} {}", item.description(), item.cost);
    }

    Ok(())
}
