pub mod apis;
pub mod arguments;
pub mod config;
pub mod constants;
pub mod display;
pub mod errors; // FundingError
pub mod funding; // fetch -> filter -> aggregate -> rank
pub mod logger;
