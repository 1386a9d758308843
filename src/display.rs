//! Terminal rendering of the participants ledger
//!
//! All rounding happens here; the pipeline hands over unrounded values.
use crate::funding::{LedgerSummary, ParticipantEntry};
use tabled::{
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style,
    },
    Table, Tabled,
};

#[derive(Tabled)]
struct ParticipantRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Wallet")]
    wallet: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Allocation")]
    allocation: String,
    #[tabled(rename = "Purchases")]
    purchases: u64,
    #[tabled(rename = "Last Slot")]
    last_slot: u64,
    #[tabled(rename = "Spent (USDC)")]
    spend: String,
    #[tabled(rename = "Avg Price")]
    average_price: String,
}

/// `FPN8XS...HMxk` style short address
pub fn format_wallet_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Fixed decimals with `,` thousands separators
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_usd(value: f64) -> String {
    format!("${}", format_grouped(value, 2))
}

pub fn format_price(value: f64) -> String {
    format!("${:.4}", value)
}

/// Table of the first `top` participants
pub fn render_participants_table(entries: &[ParticipantEntry], top: usize) -> String {
    let rows: Vec<ParticipantRow> = entries
        .iter()
        .take(top)
        .enumerate()
        .map(|(i, entry)| ParticipantRow {
            rank: i + 1,
            wallet: format_wallet_address(&entry.wallet_address),
            quantity: format_grouped(entry.quantity, 0),
            allocation: format_percentage(entry.percentage_allocation),
            purchases: entry.purchase_count,
            last_slot: entry.last_purchase_slot,
            spend: format_usd(entry.spend),
            average_price: format_price(entry.average_price),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Modify::new(Columns::new(2..=7)).with(Alignment::right()));

    table.to_string()
}

pub fn render_summary(summary: &LedgerSummary, shown: usize) -> String {
    [
        format!("Unique buyers:        {}", summary.unique_buyers),
        format!("Total bought:         {}", format_grouped(summary.total_quantity, 0)),
        format!("Raised (from fills):  {}", format_usd(summary.total_raised_from_fills)),
        format!("Raised (reported):    {}", format_usd(summary.total_raised_reported)),
        format!(
            "Showing top {} participants out of {} total unique buyers",
            shown.min(summary.unique_buyers),
            summary.unique_buyers
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(wallet: &str, quantity: f64, percentage: f64) -> ParticipantEntry {
        ParticipantEntry {
            wallet_address: wallet.to_string(),
            quantity,
            percentage_allocation: percentage,
            purchase_count: 1,
            last_purchase_slot: 0,
            spend: quantity * 0.01,
            average_price: 0.01,
        }
    }

    #[test]
    fn test_format_wallet_address() {
        assert_eq!(
            format_wallet_address("FPN8XSRKtuG8sRnzAfYzdTAcewXvihnh8rR5KuRVHMxk"),
            "FPN8XS...HMxk"
        );
        assert_eq!(format_wallet_address("short"), "short");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1014264.0, 0), "1,014,264");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(10142.64, 2), "10,142.64");
        assert_eq!(format_grouped(0.0, 2), "0.00");
        assert_eq!(format_grouped(-1234.5, 1), "-1,234.5");
        assert_eq!(format_grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_money_and_percent() {
        assert_eq!(format_percentage(25.7071), "25.71%");
        assert_eq!(format_usd(10000.0), "$10,000.00");
        assert_eq!(format_price(0.01), "$0.0100");
    }

    #[test]
    fn test_table_respects_top_limit() {
        let entries = vec![
            entry("FPN8XSRKtuG8sRnzAfYzdTAcewXvihnh8rR5KuRVHMxk", 1014264.0, 60.0),
            entry("GxEmQ2XcxsismsX4s4jbiEubuBtqax67Pa8g25AgGXwN", 609630.0, 36.0),
            entry("D5B6PQycZLkrApdjrKjqEeBDZDXTJJUvnGJ64qkHP6eV", 67606.0, 4.0),
        ];

        let table = render_participants_table(&entries, 2);
        assert!(table.contains("FPN8XS...HMxk"));
        assert!(table.contains("1,014,264"));
        assert!(table.contains("60.00%"));
        assert!(table.contains("GxEmQ2...GXwN"));
        assert!(!table.contains("D5B6PQ...P6eV"));
    }

    #[test]
    fn test_render_summary() {
        let summary = LedgerSummary {
            unique_buyers: 3,
            total_quantity: 1691500.0,
            total_raised_from_fills: 16915.0,
            total_raised_reported: 10000.0,
        };
        let text = render_summary(&summary, 100);
        assert!(text.contains("Unique buyers:        3"));
        assert!(text.contains("1,691,500"));
        assert!(text.contains("$16,915.00"));
        assert!(text.contains("$10,000.00"));
        assert!(text.contains("Showing top 3 participants out of 3"));
    }
}
