//! Completed-fills API response types
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// CUSTOM DESERIALIZERS - atom amounts arrive as strings
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

fn parse_atoms<E: serde::de::Error>(value: StringOrNumber) -> Result<u64, E> {
    match value {
        StringOrNumber::Number(n) => Ok(n),
        StringOrNumber::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| E::custom(format!("invalid integer amount '{}': {}", s, e))),
    }
}

/// Integer encoded as a JSON string ("1000000000") or a plain number
fn deserialize_atoms<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_atoms(StringOrNumber::deserialize(deserializer)?)
}

/// Optional string-encoded integer; null, missing or empty become None
fn deserialize_optional_atoms<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => parse_atoms(value).map(Some),
    }
}

// ============================================================================
// FILL RECORDS
// ============================================================================

/// One executed match between a maker and a taker, as served by the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFill {
    pub slot: u64,
    pub maker: String,
    pub taker: String,
    #[serde(default)]
    pub market: String,
    /// Base-asset quantity in atomic units
    #[serde(deserialize_with = "deserialize_atoms")]
    pub base_atoms: u64,
    #[serde(default)]
    pub signature: String,
    /// Quote per base token, already decimal-adjusted
    pub price_atoms: f64,
    /// Quote-asset quantity in atomic units
    #[serde(deserialize_with = "deserialize_atoms")]
    pub quote_atoms: u64,
    pub taker_is_buy: bool,
    /// Maker order was placed through a relay / global order
    #[serde(default)]
    pub is_maker_global: bool,
    /// End-user signer when the taker is an aggregator
    #[serde(default)]
    pub original_signer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_atoms")]
    pub maker_sequence_number: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_atoms")]
    pub taker_sequence_number: Option<u64>,
    #[serde(default)]
    pub aggregator: Option<String>,
}

/// One page of the completed-fills endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillsPage {
    pub fills: Vec<RawFill>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub has_more: bool,
}
