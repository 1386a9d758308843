//! Per-wallet accumulation of qualifying fills
use super::filter::QualifyingFill;
use super::types::{TokenScale, WalletAccumulator, WalletLedger};

/// Fold qualifying fills into a fresh wallet ledger.
///
/// Quantity and spend are converted from atoms with `scale`; the fill price is
/// already quote-per-token. No rounding happens here.
pub fn aggregate(fills: &[QualifyingFill<'_>], scale: TokenScale) -> WalletLedger {
    let mut ledger = WalletLedger::new();

    for qualifying in fills {
        let fill = qualifying.fill;
        let quantity = scale.base_units(fill.base_atoms);
        let spend = scale.quote_units(fill.quote_atoms);

        ledger
            .entry(qualifying.buyer.to_string())
            .or_insert_with(WalletAccumulator::default)
            .record(quantity, spend, fill.price_atoms, fill.slot);
    }

    ledger
}
