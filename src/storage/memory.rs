//! In-memory storage backend
//!
//! Last resort of the fallback chain: the table lives only in this process
//! and is lost on exit. Persistence calls succeed trivially so mutation
//! semantics stay uniform across backends.

use crate::error::MonetaResult;
use crate::models::Transaction;

use super::{BackendKind, TransactionStore};

/// Ephemeral transaction store
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Vec<Transaction>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    fn load(&mut self) -> MonetaResult<Vec<Transaction>> {
        Ok(self.table.clone())
    }

    fn append(&mut self, tx: &Transaction) -> MonetaResult<()> {
        self.table.push(tx.clone());
        Ok(())
    }

    fn replace_all(&mut self, table: &[Transaction]) -> MonetaResult<()> {
        self.table = table.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionKind};
    use chrono::NaiveDate;

    #[test]
    fn test_memory_store_round_trip() {
        let tx = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Paycheck",
            Category::Salary,
            TransactionKind::Income,
            Money::from_cents(100_000),
        );

        let mut store = MemoryStore::new();
        assert_eq!(store.kind(), BackendKind::Memory);
        assert!(!store.kind().is_persistent());

        store.append(&tx).unwrap();
        assert_eq!(store.load().unwrap(), vec![tx.clone()]);

        store.replace_all(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Vec::new());
    }
}
