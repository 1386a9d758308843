//! Configuration system
//!
//! - `macros`: `config_struct!` for structs with embedded defaults
//! - `schemas`: the feed, funding and display sections
//! - `utils`: TOML loading and the process-wide instance used by the binary
pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{Config, DisplayConfig, FeedConfig, FundingConfig};
pub use utils::{
    get_config_clone, load_config_from_path, parse_config, read_config_file,
    CONFIG_FILE_PATH,
};
