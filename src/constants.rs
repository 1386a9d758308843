//! Global constants used across the funding ledger
//!
//! These are the fixed values the pipeline was built around. The config
//! schemas use them as defaults, so a missing config file reproduces them.

// ============================================================================
// FILLS FEED
// ============================================================================

/// Base URL of the market stats service serving completed fills
pub const FILLS_API_BASE_URL: &str = "https://mfx-stats-mainnet.fly.dev";

/// Market whose fills make up the funding round
pub const FUNDING_MARKET_ID: &str = "B5DoSf56Xa1c83PxKhQiU74fau1UBQNMpGdJgybHhodr";

/// Fills requested per page
pub const FILLS_PAGE_SIZE: usize = 1000;

/// Pagination stops once the next offset would exceed this value,
/// whatever the server reports in `hasMore`
pub const FILLS_MAX_OFFSET: usize = 10_000;

/// Request timeout in seconds
pub const FILLS_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// FUNDING ROUND
// ============================================================================

/// Treasury wallet selling the token into the market
pub const TREASURY_WALLET: &str = "3BEvopNQ89zkM4r6ADva18i5fao1sqR1pmswyQyfj838";

/// Decimal places of the token being sold (base asset)
pub const BASE_DECIMALS: u32 = 9;

/// Decimal places of USDC (quote asset)
pub const QUOTE_DECIMALS: u32 = 6;

/// Largest decimal scale accepted from configuration
pub const MAX_TOKEN_DECIMALS: u32 = 18;

/// Authoritative raise figure reported outside the fills feed (USDC)
pub const FIXED_TOTAL_RAISED_USDC: f64 = 10_000.0;

/// Rows shown by the participants table
pub const DEFAULT_TOP_PARTICIPANTS: usize = 100;
