//! Centralized command-line argument handling
//!
//! Arguments are captured once into `CMD_ARGS` and read from anywhere through
//! small helpers. The `*_in` variants work on an explicit slice and hold the
//! actual parsing rules.
use crate::logger::LogTag;
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Copy of the current arguments (falls back to env::args if poisoned)
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

pub fn has_arg_in(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Value following `flag`, if any
pub fn arg_value_in(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .filter(|value| !value.starts_with("--"))
        .cloned()
}

pub fn has_arg(flag: &str) -> bool {
    has_arg_in(&get_cmd_args(), flag)
}

pub fn get_arg_value(flag: &str) -> Option<String> {
    arg_value_in(&get_cmd_args(), flag)
}

// =============================================================================
// RUN OPTIONS
// =============================================================================

/// `--config <path>` override for the TOML file
pub fn get_config_path() -> Option<String> {
    get_arg_value("--config")
}

/// Positive `--top <n>` value in `args`; zero or garbage is ignored
pub fn top_override_in(args: &[String]) -> Option<usize> {
    arg_value_in(args, "--top")
        .and_then(|s| s.parse().ok())
        .filter(|n| *n > 0)
}

/// `--top <n>` override for the number of table rows
pub fn get_top_override() -> Option<usize> {
    top_override_in(&get_cmd_args())
}

/// Print the ledger as JSON instead of a table
pub fn is_json_output_enabled() -> bool {
    has_arg("--json")
}

// =============================================================================
// DEBUG FLAGS
// =============================================================================

pub fn is_debug_api_enabled() -> bool {
    has_arg("--debug-api")
}

pub fn is_debug_fills_enabled() -> bool {
    has_arg("--debug-fills")
}

pub fn is_debug_ledger_enabled() -> bool {
    has_arg("--debug-ledger")
}

/// Names of the debug modes switched on in `args`
pub fn enabled_debug_modes_in(args: &[String]) -> Vec<String> {
    LogTag::all()
        .iter()
        .map(|tag| tag.to_debug_key())
        .filter(|key| has_arg_in(args, &format!("--debug-{}", key)))
        .collect()
}

pub fn get_enabled_debug_modes() -> Vec<String> {
    enabled_debug_modes_in(&get_cmd_args())
}

pub fn print_help() {
    println!("funding_ledger - treasury sale participants ledger");
    println!();
    println!("USAGE:");
    println!("    funding_ledger [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    --help, -h                Show this help message");
    println!("    --config <path>           Config file (default: data/config.toml)");
    println!("    --top <n>                 Number of participants shown in the table");
    println!("    --json                    Print the full ledger as JSON on stdout");
    println!("    --quiet                   Only log warnings and errors");
    println!("    --verbose                 Enable verbose logging for every tag");
    println!("    --log-level <level>       error, warning, info, debug or verbose");
    println!();
    println!("DEBUG FLAGS:");
    for tag in LogTag::all() {
        let flag = format!("--debug-{}", tag.to_debug_key());
        println!("    {:<26}{} debug output", flag, tag.to_plain_string());
    }
}

/// Common argument patterns
pub mod patterns {
    use super::*;

    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }
}
