//! Transaction CLI commands
//!
//! Implements add/list/edit/delete against the session table.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::format_transaction_register;
use crate::error::{MonetaError, MonetaResult};
use crate::models::{Category, Money, Period, TransactionKind};
use crate::models::{Transaction, TransactionId};
use crate::services::{SaveOutcome, Session, TransactionPatch};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Transaction type: "income" or "expense"
        kind: String,
        /// Amount (e.g. "1000.00"); the sign is derived from the type
        amount: String,
        /// Description
        description: String,
        /// Category label (defaults to the type's "Other" bucket)
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Account/card reference
        #[arg(short, long)]
        account: Option<String>,
    },
    /// List transactions
    List {
        /// Restrict to a month (YYYY-MM) or "all"
        #[arg(short, long)]
        month: Option<String>,
        /// Filter by type: "income" or "expense"
        #[arg(short, long)]
        kind: Option<String>,
        /// Filter by category label
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Edit a transaction by id (as shown by `list`)
    Edit {
        /// Transaction id
        id: String,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category label
        #[arg(short, long)]
        category: Option<String>,
        /// New type: "income" or "expense"
        #[arg(short, long)]
        kind: Option<String>,
        /// New amount; the sign is derived from the type
        #[arg(short, long)]
        amount: Option<String>,
        /// New account/card reference (empty string clears it)
        #[arg(long)]
        account: Option<String>,
    },
    /// Delete a transaction by id (as shown by `list`)
    Delete {
        /// Transaction id
        id: String,
    },
}

/// Handle a transaction subcommand
pub fn handle_transaction_command(
    session: &mut Session,
    cmd: TransactionCommands,
) -> MonetaResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            description,
            category,
            date,
            account,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = signed_amount(&amount, kind)?;
            let date = match date {
                Some(ref raw) => parse_date(raw)?,
                None => chrono::Local::now().date_naive(),
            };
            let category = match category {
                Some(ref raw) => parse_category(raw)?,
                None => default_category(kind),
            };

            let mut tx = Transaction::new(date, description, category, kind, amount);
            if let Some(account) = account {
                tx = tx.with_account(account);
            }

            let outcome = session.append(tx)?;
            report_outcome("Transaction added", &outcome);
        }
        TransactionCommands::List {
            month,
            kind,
            category,
        } => {
            let period = parse_period_filter(month.as_deref())?;
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            let category = category.as_deref().map(parse_category).transpose()?;

            let items: Vec<(TransactionId, &Transaction)> = session
                .table()
                .iter()
                .enumerate()
                .map(|(idx, tx)| (TransactionId(idx), tx))
                .filter(|(_, tx)| period.contains(tx.date))
                .filter(|(_, tx)| kind.map_or(true, |k| tx.kind == k))
                .filter(|(_, tx)| category.map_or(true, |c| tx.category == c))
                .collect();

            print!("{}", format_transaction_register(&items));
        }
        TransactionCommands::Edit {
            id,
            date,
            description,
            category,
            kind,
            amount,
            account,
        } => {
            let id = parse_id(&id)?;
            let kind = kind.as_deref().map(parse_kind).transpose()?;

            // The sign of a new amount follows the (possibly new) type
            let effective_kind = match kind {
                Some(k) => k,
                None => {
                    session
                        .get(id)
                        .ok_or_else(|| MonetaError::transaction_not_found(id.to_string()))?
                        .kind
                }
            };
            let amount = match amount.as_deref() {
                Some(raw) => Some(signed_amount(raw, effective_kind)?),
                // Changing the type alone re-signs the existing amount
                None => match (kind, session.get(id)) {
                    (Some(TransactionKind::Income), Some(tx)) => Some(tx.amount.abs()),
                    (Some(TransactionKind::Expense), Some(tx)) => Some(-tx.amount.abs()),
                    _ => None,
                },
            };
            let category = category.as_deref().map(parse_category).transpose()?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let patch = TransactionPatch {
                date,
                description,
                category,
                kind,
                amount,
                account,
            };

            let outcome = session.update(id, &patch)?;
            report_outcome("Transaction updated", &outcome);
        }
        TransactionCommands::Delete { id } => {
            let id = parse_id(&id)?;
            let outcome = session.delete(id)?;
            report_outcome("Transaction deleted", &outcome);
        }
    }

    Ok(())
}

fn report_outcome(action: &str, outcome: &SaveOutcome) {
    match outcome {
        SaveOutcome::Persisted => println!("{}.", action),
        SaveOutcome::Unpersisted(reason) => {
            println!("{} (in memory).", action);
            eprintln!("Warning: could not persist the change: {}", reason);
        }
    }
}

pub(crate) fn parse_kind(raw: &str) -> MonetaResult<TransactionKind> {
    raw.parse()
        .map_err(|e: String| MonetaError::validation("type", e))
}

pub(crate) fn parse_category(raw: &str) -> MonetaResult<Category> {
    raw.parse()
        .map_err(|e: crate::models::category::UnknownCategory| {
            MonetaError::validation("category", e.to_string())
        })
}

pub(crate) fn parse_date(raw: &str) -> MonetaResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| MonetaError::validation("date", format!("invalid date '{}', expected YYYY-MM-DD", raw)))
}

pub(crate) fn parse_id(raw: &str) -> MonetaResult<TransactionId> {
    raw.parse()
        .map_err(|_| MonetaError::validation("id", format!("invalid transaction id '{}'", raw)))
}

/// Parse an optional month filter into a period (absent means all time)
pub(crate) fn parse_period_filter(raw: Option<&str>) -> MonetaResult<Period> {
    match raw {
        Some(raw) => raw
            .parse()
            .map_err(|e: String| MonetaError::validation("month", e)),
        None => Ok(Period::AllTime),
    }
}

/// Parse an amount and sign it to match the transaction type
fn signed_amount(raw: &str, kind: TransactionKind) -> MonetaResult<Money> {
    let amount = Money::parse(raw)
        .map_err(|e| MonetaError::validation("amount", e.to_string()))?;
    Ok(match kind {
        TransactionKind::Income => amount.abs(),
        TransactionKind::Expense => -amount.abs(),
    })
}

fn default_category(kind: TransactionKind) -> Category {
    match kind {
        TransactionKind::Income => Category::OtherIncome,
        TransactionKind::Expense => Category::OtherExpense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_amount_follows_kind() {
        assert_eq!(
            signed_amount("200.00", TransactionKind::Expense).unwrap(),
            Money::from_cents(-20_000)
        );
        assert_eq!(
            signed_amount("-200.00", TransactionKind::Expense).unwrap(),
            Money::from_cents(-20_000)
        );
        assert_eq!(
            signed_amount("1000", TransactionKind::Income).unwrap(),
            Money::from_cents(100_000)
        );
    }

    #[test]
    fn test_parse_errors_name_the_field() {
        assert!(parse_date("05/01/2024").unwrap_err().to_string().contains("date"));
        assert!(parse_kind("transfer").unwrap_err().to_string().contains("type"));
        assert!(parse_id("abc").unwrap_err().to_string().contains("id"));
        assert!(signed_amount("12,50", TransactionKind::Income)
            .unwrap_err()
            .to_string()
            .contains("amount"));
    }

    #[test]
    fn test_period_filter_defaults_to_all_time() {
        assert_eq!(parse_period_filter(None).unwrap(), Period::AllTime);
        assert_eq!(
            parse_period_filter(Some("2024-01")).unwrap(),
            Period::month(2024, 1)
        );
    }
}
