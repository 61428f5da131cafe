//! Period summary report
//!
//! The aggregation behind the dashboard: totals, balances, and a
//! per-category breakdown for one calendar month or all time. Transfers
//! between own accounts are excluded from the income/expense totals and
//! reported as a separate net figure.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Category, Money, Period, Transaction, TransactionKind};

/// Summed amount for one category within the period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub kind: TransactionKind,
    /// Signed total (negative for expense categories)
    pub total: Money,
    pub transaction_count: usize,
}

/// Derived figures for one period
#[derive(Debug, Clone)]
pub struct Summary {
    /// The period the figures cover
    pub period: Period,
    /// Total income in the period (transfers excluded)
    pub income: Money,
    /// Total expense in the period as a positive figure (transfers excluded)
    pub expense: Money,
    /// income − expense
    pub net: Money,
    /// Net of internal transfers inside the period
    pub transfer_net: Money,
    /// Running balance of everything before the period, plus the
    /// configured initial balance
    pub prior_balance: Money,
    /// Prior balance plus period movement dated up to today
    pub current_balance: Money,
    /// Prior balance plus the whole period's movement, future dates included
    pub projected_balance: Money,
    /// Per-category totals within the period, largest magnitude first
    pub by_category: Vec<CategoryTotal>,
}

impl Summary {
    /// How far the current balance has progressed toward the projected one
    ///
    /// The denominator is clamped to at least one cent and the ratio to
    /// [0, 1], so the progress gauge stays drawable for zero, negative,
    /// or overshot projections.
    pub fn progress_ratio(&self) -> f64 {
        let denominator = self.projected_balance.cents().abs().max(1);
        let ratio = self.current_balance.cents() as f64 / denominator as f64;
        ratio.clamp(0.0, 1.0)
    }
}

/// Compute the summary for a period
///
/// `initial_balance` is the configured balance carried from before the
/// first recorded transaction; `today` splits the period into realized
/// and future movement.
pub fn summarize(
    table: &[Transaction],
    period: Period,
    initial_balance: Money,
    today: NaiveDate,
) -> Summary {
    let mut income = Money::zero();
    let mut expense = Money::zero();
    let mut transfer_net = Money::zero();
    let mut prior = initial_balance;
    let mut realized = Money::zero();
    let mut full_period = Money::zero();
    let mut per_category: HashMap<(Category, TransactionKind), (Money, usize)> = HashMap::new();

    for tx in table {
        if period.is_before(tx.date) {
            prior += tx.signed_amount();
            continue;
        }
        if !period.contains(tx.date) {
            continue;
        }

        full_period += tx.signed_amount();
        if tx.date <= today {
            realized += tx.signed_amount();
        }

        if tx.category.is_transfer() {
            transfer_net += tx.signed_amount();
        } else {
            match tx.kind {
                TransactionKind::Income => income += tx.amount,
                TransactionKind::Expense => expense += tx.amount.abs(),
            }
        }

        let entry = per_category
            .entry((tx.category, tx.kind))
            .or_insert((Money::zero(), 0));
        entry.0 += tx.signed_amount();
        entry.1 += 1;
    }

    let mut by_category: Vec<CategoryTotal> = per_category
        .into_iter()
        .map(|((category, kind), (total, transaction_count))| CategoryTotal {
            category,
            kind,
            total,
            transaction_count,
        })
        .collect();
    by_category.sort_by(|a, b| {
        b.total
            .abs()
            .cmp(&a.total.abs())
            .then_with(|| a.category.label().cmp(b.category.label()))
    });

    Summary {
        period,
        income,
        expense,
        net: income - expense,
        transfer_net,
        prior_balance: prior,
        current_balance: prior + realized,
        projected_balance: prior + full_period,
        by_category,
    }
}
