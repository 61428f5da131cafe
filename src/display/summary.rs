//! Summary display formatting
//!
//! Renders the period summary: balance metrics, a text progress gauge,
//! and the per-category breakdown.

use crate::models::TransactionKind;
use crate::reports::Summary;

const GAUGE_WIDTH: usize = 24;

/// Format a full period summary for terminal output
pub fn format_summary(summary: &Summary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary for {}\n", summary.period));
    output.push_str(&"=".repeat(40));
    output.push('\n');

    output.push_str(&format!(
        "  Income:            {:>14}\n",
        summary.income.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Expenses:          {:>14}\n",
        summary.expense.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Net:               {:>14}\n",
        summary.net.format_with_symbol(currency)
    ));
    if !summary.transfer_net.is_zero() {
        output.push_str(&format!(
            "  Transfers (net):   {:>14}\n",
            summary.transfer_net.format_with_symbol(currency)
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "  Prior balance:     {:>14}\n",
        summary.prior_balance.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Current balance:   {:>14}\n",
        summary.current_balance.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Projected balance: {:>14}\n",
        summary.projected_balance.format_with_symbol(currency)
    ));
    output.push_str(&format!("  {}\n", format_gauge(summary.progress_ratio())));

    if !summary.by_category.is_empty() {
        output.push('\n');
        output.push_str("By category:\n");
        for entry in &summary.by_category {
            let sign = match entry.kind {
                TransactionKind::Income => "+",
                TransactionKind::Expense => "-",
            };
            output.push_str(&format!(
                "  {} {:16} {:>14}  ({} txn{})\n",
                sign,
                entry.category.label(),
                entry.total.abs().format_with_symbol(currency),
                entry.transaction_count,
                if entry.transaction_count == 1 { "" } else { "s" },
            ));
        }
    }

    output
}

/// Render a ratio in [0, 1] as a fixed-width text gauge
fn format_gauge(ratio: f64) -> String {
    let filled = (ratio * GAUGE_WIDTH as f64).round() as usize;
    let filled = filled.min(GAUGE_WIDTH);
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(GAUGE_WIDTH - filled),
        ratio * 100.0
    )
}
