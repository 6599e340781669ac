//! shipquote CLI - Command-line interface
//!
//! Commands:
//!   quote     - Price a shipment manifest
//!   classify  - Price a single parcel
//!   tiers     - Show the pricing table
//!   schema    - Print JSON schemas for inputs and outputs

mod cli;

use shipquote::VERSION;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "quote" => cli::cmd_quote(&args[2..]),
        "classify" => cli::cmd_classify(&args[2..]),
        "tiers" => cli::cmd_tiers(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("shipquote {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Log to stderr so reports and JSON on stdout stay clean.
/// Filter comes from `SHIPQUOTE_LOG`, e.g. `SHIPQUOTE_LOG=shipquote=debug`.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("SHIPQUOTE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!(
        r#"
shipquote - Tiered parcel shipping costs

USAGE:
    shipquote <COMMAND> [OPTIONS]

COMMANDS:
    quote <manifest.yaml|json>            Price every parcel in a manifest
    classify <width> <depth> <height> <weight>
                                          Price a single parcel (cm, kg)
    tiers [tier]                          Show the pricing table (or one tier)
    schema [manifest|breakdown|line-item] Print JSON schema
    version                               Print version

OPTIONS:
    --speed <normal|expedited>   Override the manifest's speed (quote)
    --json                       JSON output (quote, classify, tiers)
    --output <file>              Output file (default: stdout)

ENVIRONMENT:
    SHIPQUOTE_LOG                Log filter, e.g. debug or shipquote=debug

EXAMPLES:
    shipquote quote shipment.yaml
    shipquote quote shipment.json --speed expedited --json
    shipquote classify 20 30 40 12.5
    shipquote schema manifest > manifest.schema.json
"#
    );
}
