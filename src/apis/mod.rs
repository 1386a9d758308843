//! Remote API clients
pub mod client;
pub mod fills;

pub use fills::{FillsClient, FillsPage, RawFill};
