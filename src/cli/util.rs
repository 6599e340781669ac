//! CLI utility helpers

use shipquote::{Error, Result, ShippingSpeed};
use std::fs;
use std::path::PathBuf;

/// Options that consume the following argument
const VALUE_OPTIONS: [&str; 4] = ["--speed", "-s", "--output", "-o"];

/// True if a bare flag such as `--json` is present
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

/// Value of the first matching `--name value` option
fn option_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    for (i, arg) in args.iter().enumerate() {
        if names.contains(&arg.as_str()) {
            return args.get(i + 1).map(|s| s.as_str());
        }
    }
    None
}

/// Arguments that are neither options nor option values
pub fn positional_args(args: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut skip_next = false;

    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_OPTIONS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        positional.push(arg.as_str());
    }

    positional
}

/// Parse --speed argument, if given
pub fn parse_speed_arg(args: &[String]) -> Result<Option<ShippingSpeed>> {
    match option_value(args, &["--speed", "-s"]) {
        Some(speed) => Ok(Some(speed.parse()?)),
        None if has_flag(args, "--speed") || has_flag(args, "-s") => {
            Err("--speed requires a value: normal or expedited".into())
        }
        None => Ok(None),
    }
}

/// Parse --output argument to determine output file path
pub fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    option_value(args, &["--output", "-o"]).map(PathBuf::from)
}

/// Parse a numeric positional argument
pub fn parse_number(name: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| Error::Other(format!("{} must be a number, got '{}'", name, value)))
}

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
