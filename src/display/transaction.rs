//! Transaction display formatting
//!
//! Formats the transaction register for terminal output. Ids shown here
//! are the positional ids accepted by `edit` and `delete`.

use crate::models::{Transaction, TransactionId, TransactionKind};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(id: TransactionId, tx: &Transaction) -> String {
    let kind_icon = match tx.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    let account = tx.account.as_deref().unwrap_or("");

    format!(
        "{:>4} {} {} {:24} {:14} {:>12} {}",
        id,
        kind_icon,
        tx.date.format("%Y-%m-%d"),
        truncate(&tx.description, 24),
        truncate(tx.category.label(), 14),
        tx.amount.to_string(),
        truncate(account, 12),
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(items: &[(TransactionId, &Transaction)]) -> String {
    if items.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4} {:1} {:10} {:24} {:14} {:>12} {}\n",
        "Id", "", "Date", "Description", "Category", "Amount", "Account"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for (id, tx) in items {
        output.push_str(&format_transaction_row(*id, tx));
        output.push('\n');
    }

    output
}

/// Truncate a string to a max length, adding an ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn sample_tx() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Paycheck",
            Category::Salary,
            TransactionKind::Income,
            Money::from_cents(100_000),
        )
        .with_account("Checking")
    }

    #[test]
    fn test_row_contains_fields() {
        let row = format_transaction_row(TransactionId(3), &sample_tx());
        assert!(row.contains("3"));
        assert!(row.contains("2024-01-05"));
        assert!(row.contains("Paycheck"));
        assert!(row.contains("Salary"));
        assert!(row.contains("1000.00"));
        assert!(row.contains("Checking"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_transaction_register(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very lo…");
    }
}
