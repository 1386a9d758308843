//! Allocation percentages, ranking and raise totals
use super::types::{LedgerSummary, ParticipantEntry, WalletLedger};
use crate::config::FundingConfig;

/// Turn a finished ledger into participant rows sorted by quantity descending.
///
/// Equal quantities are ordered by wallet address so the output is stable
/// across runs. With a zero global total every allocation is 0.
pub fn rank_participants(ledger: WalletLedger) -> Vec<ParticipantEntry> {
    let global_total: f64 = ledger.values().map(|acc| acc.total_quantity).sum();

    let mut entries: Vec<ParticipantEntry> = ledger
        .into_iter()
        .map(|(wallet, acc)| ParticipantEntry {
            percentage_allocation: if global_total > 0.0 {
                acc.total_quantity / global_total * 100.0
            } else {
                0.0
            },
            average_price: acc.average_price(),
            wallet_address: wallet,
            quantity: acc.total_quantity,
            purchase_count: acc.purchase_count,
            last_purchase_slot: acc.last_slot,
            spend: acc.total_spend,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.quantity
            .total_cmp(&a.quantity)
            .then_with(|| a.wallet_address.cmp(&b.wallet_address))
    });

    entries
}

/// Total raised as the sum of every participant's spend
pub fn total_raised(entries: &[ParticipantEntry]) -> f64 {
    entries.iter().map(|entry| entry.spend).sum()
}

/// Total raised as reported outside the fills feed
pub fn fixed_total_raised(config: &FundingConfig) -> f64 {
    config.fixed_total_raised
}

pub fn total_quantity(entries: &[ParticipantEntry]) -> f64 {
    entries.iter().map(|entry| entry.quantity).sum()
}

pub fn summarize(entries: &[ParticipantEntry], config: &FundingConfig) -> LedgerSummary {
    LedgerSummary {
        unique_buyers: entries.len(),
        total_quantity: total_quantity(entries),
        total_raised_from_fills: total_raised(entries),
        total_raised_reported: fixed_total_raised(config),
    }
}
