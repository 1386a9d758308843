//! Funding round participants pipeline
//!
//! fetch pages -> select treasury sales -> accumulate per wallet -> rank.
//! Each call builds its own wallet ledger, so concurrent or repeated runs
//! never share state.

pub mod aggregator;
pub mod allocator;
pub mod fetcher;
pub mod filter;
pub mod types;

pub use aggregator::aggregate;
pub use allocator::{fixed_total_raised, rank_participants, summarize, total_quantity, total_raised};
pub use fetcher::{fetch_all, FillSource};
pub use filter::{resolve_buyer, select_qualifying_fills, QualifyingFill};
pub use types::{LedgerSummary, ParticipantEntry, TokenScale, WalletAccumulator, WalletLedger};

use crate::apis::fills::RawFill;
use crate::arguments::is_debug_ledger_enabled;
use crate::config::Config;
use crate::errors::FundingError;
use crate::logger::{self, LogTag};

/// Run the pure part of the pipeline over already fetched fills
pub fn build_participant_ledger(
    fills: &[RawFill],
    treasury: &str,
    scale: TokenScale,
) -> Vec<ParticipantEntry> {
    let qualifying = select_qualifying_fills(fills, treasury);
    logger::debug(
        LogTag::Ledger,
        &format!(
            "{} of {} fills are treasury sales to buyers",
            qualifying.len(),
            fills.len()
        ),
    );

    let ledger = aggregate(&qualifying, scale);
    let entries = rank_participants(ledger);

    if is_debug_ledger_enabled() {
        for entry in entries.iter().take(5) {
            logger::debug(
                LogTag::Ledger,
                &format!(
                    "{} bought {} in {} purchases ({}%)",
                    entry.wallet_address,
                    entry.quantity,
                    entry.purchase_count,
                    entry.percentage_allocation
                ),
            );
        }
    }

    entries
}

/// Fetch every page from `source` and build the ranked participants ledger.
///
/// Any fetch failure aborts the run; no partial ledger is returned.
pub async fn fetch_all_participants<S>(
    source: &S,
    config: &Config,
) -> Result<Vec<ParticipantEntry>, FundingError>
where
    S: FillSource + ?Sized,
{
    let fills = fetch_all(source, config.feed.page_size, config.feed.max_offset).await?;

    let entries = build_participant_ledger(
        &fills,
        &config.funding.treasury_wallet,
        TokenScale::from_config(&config.funding),
    );

    logger::info(
        LogTag::Ledger,
        &format!("Built ledger with {} participants", entries.len()),
    );

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::fills::FillsPage;
    use crate::funding::fetcher::tests::{fill, ScriptedSource};

    const TREASURY: &str = "T";

    fn config() -> Config {
        let mut config = Config::default();
        config.funding.treasury_wallet = TREASURY.to_string();
        config.feed.page_size = 2;
        config
    }

    fn treasury_sale(taker: &str, base_atoms: u64, quote_atoms: u64, slot: u64) -> RawFill {
        RawFill {
            maker: TREASURY.to_string(),
            taker: taker.to_string(),
            base_atoms,
            quote_atoms,
            ..fill(slot)
        }
    }

    #[test]
    fn test_single_purchase_scenario() {
        let fills = vec![treasury_sale("A", 1_000_000_000, 10_000_000, 5)];

        let entries = build_participant_ledger(&fills, TREASURY, TokenScale::default());

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.wallet_address, "A");
        assert_eq!(entry.quantity, 1.0);
        assert_eq!(entry.spend, 10.0);
        assert_eq!(entry.percentage_allocation, 100.0);
        assert_eq!(entry.purchase_count, 1);
        assert_eq!(entry.last_purchase_slot, 5);
        assert!((entry.average_price - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_non_qualifying_fills_contribute_nothing() {
        let mut sells_to_treasury = treasury_sale("A", 5_000_000_000, 50_000_000, 2);
        sells_to_treasury.taker_is_buy = false;
        let mut other_maker = treasury_sale("A", 7_000_000_000, 70_000_000, 3);
        other_maker.maker = "X".to_string();

        let fills = vec![
            treasury_sale("A", 1_000_000_000, 10_000_000, 1),
            sells_to_treasury,
            other_maker,
        ];
        let entries = build_participant_ledger(&fills, TREASURY, TokenScale::default());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, 1.0);
        assert_eq!(entries[0].purchase_count, 1);
        assert_eq!(entries[0].last_purchase_slot, 1);
    }

    #[test]
    fn test_relayed_trades_credit_original_signer() {
        let mut relayed = treasury_sale("RELAY", 2_000_000_000, 20_000_000, 8);
        relayed.original_signer = Some("A".to_string());
        relayed.aggregator = Some("jupiter".to_string());
        let mut self_trade = treasury_sale("RELAY", 9_000_000_000, 90_000_000, 9);
        self_trade.original_signer = Some(TREASURY.to_string());

        let fills = vec![treasury_sale("A", 1_000_000_000, 10_000_000, 4), relayed, self_trade];
        let entries = build_participant_ledger(&fills, TREASURY, TokenScale::default());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].wallet_address, "A");
        assert_eq!(entries[0].quantity, 3.0);
        assert_eq!(entries[0].purchase_count, 2);
        assert_eq!(entries[0].last_purchase_slot, 8);
    }

    #[tokio::test]
    async fn test_fetch_all_participants_end_to_end() {
        let source = ScriptedSource::new(vec![
            Ok(FillsPage {
                fills: vec![
                    treasury_sale("A", 300_000_000_000, 3_000_000, 10),
                    treasury_sale("B", 200_000_000_000, 2_000_000, 11),
                ],
                total: 3,
                has_more: true,
            }),
            Ok(FillsPage {
                fills: vec![treasury_sale("B", 500_000_000_000, 5_000_000, 12)],
                total: 3,
                has_more: false,
            }),
        ]);

        let entries = fetch_all_participants(&source, &config()).await.unwrap();

        assert_eq!(source.offsets(), vec![0, 2]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].wallet_address, "B");
        assert!((entries[0].quantity - 700.0).abs() < 1e-9);
        assert!((entries[0].percentage_allocation - 70.0).abs() < 1e-9);
        assert_eq!(entries[0].purchase_count, 2);
        assert_eq!(entries[0].last_purchase_slot, 12);
        assert_eq!(entries[1].wallet_address, "A");
        assert!((entries[1].percentage_allocation - 30.0).abs() < 1e-9);
        assert!((total_raised(&entries) - 10.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_no_ledger() {
        let source = ScriptedSource::new(vec![
            Ok(FillsPage {
                fills: vec![treasury_sale("A", 1_000_000_000, 10_000_000, 1)],
                total: 10,
                has_more: true,
            }),
            Err(500),
        ]);

        let err = fetch_all_participants(&source, &config()).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.to_string(),
            "Failed to fetch funding data: HTTP 500 from completeFills"
        );
    }
}
