//! Configuration utilities - loading and access helpers
//!
//! The binary loads the configuration once at startup into `CONFIG`. Library
//! code never reads the global: pipeline functions take the sections they
//! need by reference, so tests can build a `Config` directly.
use super::schemas::Config;
use crate::errors::FundingError;
use crate::logger::{self, LogTag};
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::RwLock;

/// Global configuration instance for the running binary
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Parse and validate a TOML document. Missing keys take their defaults.
pub fn parse_config(contents: &str) -> Result<Config, FundingError> {
    let config = toml::from_str::<Config>(contents)
        .map_err(|e| FundingError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Read a configuration file without touching the global.
///
/// A missing file is not an error: defaults are returned instead.
pub fn read_config_file(path: &str) -> Result<Config, FundingError> {
    if !Path::new(path).exists() {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        FundingError::Config(format!("Failed to read config file '{}': {}", path, e))
    })?;

    let config = parse_config(&contents).map_err(|e| match e {
        FundingError::Config(msg) => FundingError::Config(format!("{} ('{}')", msg, path)),
        other => other,
    })?;

    logger::debug(LogTag::Config, &format!("Loaded configuration from '{}'", path));
    Ok(config)
}

/// Load configuration from a specific path and install it as the global
pub fn load_config_from_path(path: &str) -> Result<(), FundingError> {
    let config = read_config_file(path)?;

    CONFIG
        .set(RwLock::new(config))
        .map_err(|_| FundingError::Config("Config already initialized".to_string()))
}

/// Get a clone of the loaded configuration, suitable for holding across awaits
pub fn get_config_clone() -> Result<Config, FundingError> {
    let lock = CONFIG.get().ok_or_else(|| {
        FundingError::Config("Config not initialized. Call load_config_from_path() first.".to_string())
    })?;

    let config = lock
        .read()
        .map_err(|e| FundingError::Config(format!("Failed to acquire config read lock: {}", e)))?;

    Ok(config.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FILLS_MAX_OFFSET, FILLS_PAGE_SIZE, TREASURY_WALLET};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.feed.page_size, FILLS_PAGE_SIZE);
        assert_eq!(config.feed.max_offset, FILLS_MAX_OFFSET);
        assert_eq!(config.funding.treasury_wallet, TREASURY_WALLET);
        assert_eq!(config.funding.base_decimals, 9);
        assert_eq!(config.funding.quote_decimals, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[feed]"));
        assert!(toml_str.contains("[funding]"));
        assert!(toml_str.contains("[display]"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
            [feed]
            page_size = 250

            [display]
            top_participants = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.feed.page_size, 250);
        assert_eq!(config.feed.max_offset, FILLS_MAX_OFFSET);
        assert_eq!(config.display.top_participants, 10);
        assert_eq!(config.funding.treasury_wallet, TREASURY_WALLET);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = parse_config("[feed]\npage_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("page_size"));

        let err = parse_config("[funding]\ntreasury_wallet = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("treasury_wallet"));

        assert!(parse_config("[feed\n").is_err());
    }

    #[test]
    fn test_decimal_scales_are_bounded() {
        let err = parse_config("[funding]\nbase_decimals = 4294967295\n").unwrap_err();
        assert!(err.to_string().contains("base_decimals"));

        let err = parse_config("[funding]\nquote_decimals = 19\n").unwrap_err();
        assert!(err.to_string().contains("quote_decimals"));

        let config = parse_config("[funding]\nbase_decimals = 18\nquote_decimals = 0\n").unwrap();
        assert_eq!(config.funding.base_decimals, 18);
        assert_eq!(config.funding.quote_decimals, 0);
    }

    #[test]
    fn test_read_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[funding]\nfixed_total_raised = 12500.5").unwrap();

        let config = read_config_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.funding.fixed_total_raised, 12500.5);
        assert_eq!(config.feed.page_size, FILLS_PAGE_SIZE);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = read_config_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_page_url() {
        let mut feed = Config::default().feed;
        feed.base_url = "https://stats.example/".to_string();
        feed.market_id = "MARKET".to_string();

        assert_eq!(
            feed.page_url(1000, 2000),
            "https://stats.example/completeFills?market=MARKET&limit=1000&offset=2000"
        );
    }
}
