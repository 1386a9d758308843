//! Structured logging for the funding ledger
//!
//! - Standard levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via `--debug-<tag>` flags
//! - Colored, word-wrapped console output on stderr
//!
//! ## Usage
//!
//! ```rust
//! use funding_ledger::logger::{self, LogTag};
//!
//! logger::info(LogTag::Fills, "Fetched 3 pages");
//! logger::debug(LogTag::Api, "GET completeFills offset=0"); // Only with --debug-api
//! ```
//!
//! Call [`init`] once at startup so the flags are picked up.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use self::core::should_log;
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from the process arguments
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, shown only with `--debug-<tag>`
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, shown only with `--verbose` or `--verbose-<tag>`
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
