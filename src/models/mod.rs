//! Core data models for Moneta
//!
//! This module contains the data structures that represent the tracking
//! domain: transactions, categories, money amounts, and summary periods.

pub mod category;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{Category, CategoryKind};
pub use money::Money;
pub use period::Period;
pub use transaction::{Transaction, TransactionId, TransactionKind};
