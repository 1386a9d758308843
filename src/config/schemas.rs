//! Configuration schemas - every config structure defined once with defaults
//!
//! Defaults come from `crate::constants`, so running without a config file
//! tracks the funding round the ledger was built for.
use crate::config_struct;
use crate::constants::{
    BASE_DECIMALS, DEFAULT_TOP_PARTICIPANTS, FILLS_API_BASE_URL, FILLS_MAX_OFFSET,
    FILLS_PAGE_SIZE, FILLS_TIMEOUT_SECS, FIXED_TOTAL_RAISED_USDC, FUNDING_MARKET_ID,
    MAX_TOKEN_DECIMALS, QUOTE_DECIMALS, TREASURY_WALLET,
};
use crate::errors::FundingError;

// ============================================================================
// FILLS FEED CONFIGURATION
// ============================================================================

config_struct! {
    /// Remote fills feed and pagination settings
    pub struct FeedConfig {
        /// Base URL of the stats service (no trailing slash)
        base_url: String = FILLS_API_BASE_URL.to_string(),

        /// Market whose fills are requested
        market_id: String = FUNDING_MARKET_ID.to_string(),

        /// Fills per page request
        page_size: usize = FILLS_PAGE_SIZE,

        /// Pagination ceiling, independent of the server's `hasMore`
        max_offset: usize = FILLS_MAX_OFFSET,

        timeout_secs: u64 = FILLS_TIMEOUT_SECS,

        /// Minimum spacing between page requests (0 = unlimited)
        rate_limit_per_minute: usize = 0,
    }
}

// ============================================================================
// FUNDING ROUND CONFIGURATION
// ============================================================================

config_struct! {
    /// Treasury identity and unit scaling
    pub struct FundingConfig {
        treasury_wallet: String = TREASURY_WALLET.to_string(),

        /// Decimals of the token sold by the treasury
        base_decimals: u32 = BASE_DECIMALS,

        /// Decimals of the quote currency (USDC)
        quote_decimals: u32 = QUOTE_DECIMALS,

        /// Raise figure reported off-pipeline, shown next to the summed one
        fixed_total_raised: f64 = FIXED_TOTAL_RAISED_USDC,
    }
}

// ============================================================================
// DISPLAY CONFIGURATION
// ============================================================================

config_struct! {
    /// Participants table settings
    pub struct DisplayConfig {
        top_participants: usize = DEFAULT_TOP_PARTICIPANTS,
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration structure containing all sub-configurations
    pub struct Config {
        feed: FeedConfig = FeedConfig::default(),
        funding: FundingConfig = FundingConfig::default(),
        display: DisplayConfig = DisplayConfig::default(),
    }
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl FeedConfig {
    pub fn validate(&self) -> Result<(), FundingError> {
        if self.base_url.trim().is_empty() {
            return Err(FundingError::Config("feed.base_url cannot be empty".to_string()));
        }
        if self.market_id.trim().is_empty() {
            return Err(FundingError::Config("feed.market_id cannot be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(FundingError::Config("feed.page_size must be > 0".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(FundingError::Config("feed.timeout_secs must be > 0".to_string()));
        }
        Ok(())
    }

    /// Endpoint URL for one page of fills
    pub fn page_url(&self, limit: usize, offset: usize) -> String {
        format!(
            "{}/completeFills?market={}&limit={}&offset={}",
            self.base_url.trim_end_matches('/'),
            self.market_id,
            limit,
            offset
        )
    }
}

impl FundingConfig {
    pub fn validate(&self) -> Result<(), FundingError> {
        if self.treasury_wallet.trim().is_empty() {
            return Err(FundingError::Config(
                "funding.treasury_wallet cannot be empty".to_string(),
            ));
        }
        for (name, decimals) in [
            ("base_decimals", self.base_decimals),
            ("quote_decimals", self.quote_decimals),
        ] {
            if decimals > MAX_TOKEN_DECIMALS {
                return Err(FundingError::Config(format!(
                    "funding.{} must be <= {}, got {}",
                    name, MAX_TOKEN_DECIMALS, decimals
                )));
            }
        }
        if !self.fixed_total_raised.is_finite() || self.fixed_total_raised < 0.0 {
            return Err(FundingError::Config(format!(
                "funding.fixed_total_raised must be a non-negative number, got {}",
                self.fixed_total_raised
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), FundingError> {
        self.feed.validate()?;
        self.funding.validate()?;
        if self.display.top_participants == 0 {
            return Err(FundingError::Config(
                "display.top_participants must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
