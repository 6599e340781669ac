//! Schema CLI command

use shipquote::*;

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: manifest, breakdown, line-item");
            Ok(())
        }
        "manifest" => print_schema::<ShipmentManifest>(),
        "breakdown" => print_schema::<CostBreakdownRecord>(),
        "line-item" | "item" => print_schema::<CostLineItem>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
