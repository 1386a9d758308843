//! Ledger data types shared by the aggregation stages
use crate::config::FundingConfig;
use crate::constants::{BASE_DECIMALS, QUOTE_DECIMALS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-wallet running totals, keyed by resolved buyer address
pub type WalletLedger = HashMap<String, WalletAccumulator>;

/// Decimal scaling from atomic units to human units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenScale {
    pub base_decimals: u32,
    pub quote_decimals: u32,
}

impl Default for TokenScale {
    fn default() -> Self {
        Self {
            base_decimals: BASE_DECIMALS,
            quote_decimals: QUOTE_DECIMALS,
        }
    }
}

impl TokenScale {
    pub fn from_config(config: &FundingConfig) -> Self {
        Self {
            base_decimals: config.base_decimals,
            quote_decimals: config.quote_decimals,
        }
    }

    /// Token quantity for a base-asset atom amount
    pub fn base_units(&self, atoms: u64) -> f64 {
        atoms as f64 / 10f64.powi(self.base_decimals as i32)
    }

    /// Currency amount for a quote-asset atom amount
    pub fn quote_units(&self, atoms: u64) -> f64 {
        atoms as f64 / 10f64.powi(self.quote_decimals as i32)
    }
}

/// Running totals for one buyer during a single aggregation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletAccumulator {
    pub total_quantity: f64,
    pub purchase_count: u64,
    pub last_slot: u64,
    pub total_spend: f64,
    /// Sum of price * quantity, for the volume-weighted average
    pub weighted_price_sum: f64,
}

impl WalletAccumulator {
    pub fn record(&mut self, quantity: f64, spend: f64, price: f64, slot: u64) {
        self.total_quantity += quantity;
        self.purchase_count += 1;
        self.last_slot = self.last_slot.max(slot);
        self.total_spend += spend;
        self.weighted_price_sum += price * quantity;
    }

    /// Volume-weighted average price, 0 when nothing was bought
    pub fn average_price(&self) -> f64 {
        if self.total_quantity > 0.0 {
            self.weighted_price_sum / self.total_quantity
        } else {
            0.0
        }
    }
}

/// One row of the ranked participants ledger
///
/// Values are unrounded; formatting belongs to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantEntry {
    pub wallet_address: String,
    #[serde(rename = "labsQuantity")]
    pub quantity: f64,
    /// Share of all purchased tokens, 0-100
    pub percentage_allocation: f64,
    #[serde(rename = "totalPurchases")]
    pub purchase_count: u64,
    pub last_purchase_slot: u64,
    #[serde(rename = "usdcAmount")]
    pub spend: f64,
    pub average_price: f64,
}

/// Headline figures for a finished ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub unique_buyers: usize,
    pub total_quantity: f64,
    /// Spend summed over all fills
    pub total_raised_from_fills: f64,
    /// Authoritative figure supplied from outside the feed
    pub total_raised_reported: f64,
}
