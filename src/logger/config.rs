//! Logger configuration, built from command-line flags
use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Highest level that passes the threshold check
    pub min_level: LogLevel,
    /// Tags with debug output enabled
    pub debug_tags: HashSet<String>,
    /// Tags with verbose output enabled
    pub verbose_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
        }
    }
}

impl LoggerConfig {
    /// Derive a configuration from an argument list
    ///
    /// `--quiet` and `--log-level` set the threshold explicitly. Otherwise
    /// per-tag flags raise it far enough for their lines to pass.
    pub fn from_args(args: &[String]) -> Self {
        let mut config = LoggerConfig::default();
        let mut verbose_all = false;

        for arg in args {
            if arg == "--verbose" {
                verbose_all = true;
            } else if let Some(key) = arg.strip_prefix("--debug-") {
                config.debug_tags.insert(key.to_string());
            } else if let Some(key) = arg.strip_prefix("--verbose-") {
                config.verbose_tags.insert(key.to_string());
            }
        }

        let explicit_level = arguments::arg_value_in(args, "--log-level")
            .as_deref()
            .and_then(LogLevel::parse);

        config.min_level = if arguments::has_arg_in(args, "--quiet") {
            LogLevel::Warning
        } else if let Some(level) = explicit_level {
            level
        } else if verbose_all || !config.verbose_tags.is_empty() {
            LogLevel::Verbose
        } else if !config.debug_tags.is_empty() {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };

        config
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Initialize from the process arguments
pub fn init_from_args() {
    set_logger_config(LoggerConfig::from_args(&arguments::get_cmd_args()));
}

/// Debug lines for `tag` are wanted; no `--debug-<tag>` flags means every tag
pub fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.debug_tags.is_empty() || config.debug_tags.contains(&tag.to_debug_key())
}

/// Verbose lines for `tag` are wanted; no `--verbose-<tag>` flags means every tag
pub fn is_verbose_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.verbose_tags.is_empty() || config.verbose_tags.contains(&tag.to_debug_key())
}
