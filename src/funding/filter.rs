//! Selection of treasury sales and buyer attribution
use crate::apis::fills::RawFill;

/// A treasury sale together with the wallet it is credited to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualifyingFill<'a> {
    pub buyer: &'a str,
    pub fill: &'a RawFill,
}

/// Wallet responsible for a fill.
///
/// Trades routed through an aggregator carry the end user in
/// `original_signer`; an absent or empty signer falls back to the taker.
pub fn resolve_buyer(fill: &RawFill) -> &str {
    match fill.original_signer.as_deref() {
        Some(signer) if !signer.trim().is_empty() => signer,
        _ => &fill.taker,
    }
}

/// Treasury-maker fills where the taker bought, in input order.
///
/// Fills whose resolved buyer is the treasury itself are dropped.
pub fn select_qualifying_fills<'a>(fills: &'a [RawFill], treasury: &str) -> Vec<QualifyingFill<'a>> {
    fills
        .iter()
        .filter(|fill| fill.maker == treasury && fill.taker_is_buy)
        .filter_map(|fill| {
            let buyer = resolve_buyer(fill);
            (buyer != treasury).then_some(QualifyingFill { buyer, fill })
        })
        .collect()
}
