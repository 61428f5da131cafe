//! Transaction model
//!
//! A transaction is one income or expense row in the table: date,
//! description, category, kind, signed amount, and an optional
//! account/card reference.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::money::Money;
use crate::error::{MonetaError, MonetaResult};

/// Whether a transaction is money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The label used in the flat-file and sheet encodings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

/// Identifier of a transaction within the loaded table
///
/// The flat-file layout carries no id column, so identity is positional:
/// the row's index in the table as loaded at session start. Ids printed by
/// `list` are valid for edit/delete until the next reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub usize);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TransactionId)
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Free-text description
    pub description: String,

    /// Category from the fixed catalog
    pub category: Category,

    /// Income or expense
    pub kind: TransactionKind,

    /// Signed amount: positive for income, negative for expenses
    pub amount: Money,

    /// Optional account/card reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl Transaction {
    /// Create a new transaction with no account reference
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
        kind: TransactionKind,
        amount: Money,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category,
            kind,
            amount,
            account: None,
        }
    }

    /// Set the account/card reference
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        let account = account.into();
        self.account = if account.trim().is_empty() {
            None
        } else {
            Some(account)
        };
        self
    }

    /// Validate the transaction before it enters the table
    ///
    /// Checks: non-empty description, non-zero amount, amount sign
    /// consistent with the kind, category applicable to the kind.
    pub fn validate(&self) -> MonetaResult<()> {
        if self.description.trim().is_empty() {
            return Err(MonetaError::validation(
                "description",
                "description must not be empty",
            ));
        }

        if self.amount.is_zero() {
            return Err(MonetaError::validation("amount", "amount must not be zero"));
        }

        match self.kind {
            TransactionKind::Income if self.amount.is_negative() => {
                return Err(MonetaError::validation(
                    "amount",
                    "income amounts must be positive",
                ));
            }
            TransactionKind::Expense if self.amount.is_positive() => {
                return Err(MonetaError::validation(
                    "amount",
                    "expense amounts must be negative",
                ));
            }
            _ => {}
        }

        if !self.category.applies_to(self.kind) {
            return Err(MonetaError::validation(
                "category",
                format!(
                    "category '{}' is not valid for {} transactions",
                    self.category, self.kind
                ),
            ));
        }

        Ok(())
    }

    /// The signed amount's contribution to a running balance
    pub fn signed_amount(&self) -> Money {
        self.amount
    }
}
