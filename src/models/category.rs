//! Category model
//!
//! Categories are a closed set of labels, each applicable to expenses,
//! income, or both. The set is fixed at compile time; no dynamic category
//! creation is supported.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::TransactionKind;

/// Which transaction kinds a category applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Expense,
    Income,
    /// Internal transfers carry both inflow and outflow legs
    Either,
}

/// A transaction category from the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    // Expense categories
    Housing,
    Food,
    Groceries,
    Transport,
    Health,
    Education,
    Leisure,
    Clothing,
    Subscriptions,
    Taxes,
    Insurance,
    Internet,
    #[serde(rename = "Credit Card")]
    CreditCard,
    Loans,
    #[serde(rename = "Other Expense")]
    OtherExpense,
    // Income categories
    Salary,
    Freelance,
    Investments,
    Dividends,
    #[serde(rename = "Rental Income")]
    RentalIncome,
    Sales,
    Bonus,
    #[serde(rename = "Tax Refund")]
    TaxRefund,
    Gift,
    #[serde(rename = "Other Income")]
    OtherIncome,
    // Both
    Transfer,
}

impl Category {
    /// All categories in catalog order
    pub fn all() -> &'static [Category] {
        use Category::*;
        &[
            Housing,
            Food,
            Groceries,
            Transport,
            Health,
            Education,
            Leisure,
            Clothing,
            Subscriptions,
            Taxes,
            Insurance,
            Internet,
            CreditCard,
            Loans,
            OtherExpense,
            Salary,
            Freelance,
            Investments,
            Dividends,
            RentalIncome,
            Sales,
            Bonus,
            TaxRefund,
            Gift,
            OtherIncome,
            Transfer,
        ]
    }

    /// The display label, also used in the flat-file and sheet encodings
    pub fn label(&self) -> &'static str {
        use Category::*;
        match self {
            Housing => "Housing",
            Food => "Food",
            Groceries => "Groceries",
            Transport => "Transport",
            Health => "Health",
            Education => "Education",
            Leisure => "Leisure",
            Clothing => "Clothing",
            Subscriptions => "Subscriptions",
            Taxes => "Taxes",
            Insurance => "Insurance",
            Internet => "Internet",
            CreditCard => "Credit Card",
            Loans => "Loans",
            OtherExpense => "Other Expense",
            Salary => "Salary",
            Freelance => "Freelance",
            Investments => "Investments",
            Dividends => "Dividends",
            RentalIncome => "Rental Income",
            Sales => "Sales",
            Bonus => "Bonus",
            TaxRefund => "Tax Refund",
            Gift => "Gift",
            OtherIncome => "Other Income",
            Transfer => "Transfer",
        }
    }

    /// Which transaction kinds this category applies to
    pub fn kind(&self) -> CategoryKind {
        use Category::*;
        match self {
            Housing | Food | Groceries | Transport | Health | Education | Leisure | Clothing
            | Subscriptions | Taxes | Insurance | Internet | CreditCard | Loans
            | OtherExpense => CategoryKind::Expense,
            Salary | Freelance | Investments | Dividends | RentalIncome | Sales | Bonus
            | TaxRefund | Gift | OtherIncome => CategoryKind::Income,
            Transfer => CategoryKind::Either,
        }
    }

    /// Check whether this category may be used with the given transaction kind
    pub fn applies_to(&self, kind: TransactionKind) -> bool {
        match self.kind() {
            CategoryKind::Expense => kind == TransactionKind::Expense,
            CategoryKind::Income => kind == TransactionKind::Income,
            CategoryKind::Either => true,
        }
    }

    /// Transfers are excluded from income/expense totals and reported
    /// separately in the period summary
    pub fn is_transfer(&self) -> bool {
        matches!(self, Category::Transfer)
    }

    /// Categories valid for the given transaction kind, in catalog order
    pub fn for_kind(kind: TransactionKind) -> Vec<Category> {
        Self::all()
            .iter()
            .copied()
            .filter(|c| c.applies_to(kind))
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive lookup against the catalog labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Error for labels outside the fixed catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
