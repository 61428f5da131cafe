//! Session service
//!
//! A session owns the in-memory transaction table, the active storage
//! backend, and the notices accumulated at selection time. Mutations are
//! validated first, applied to the table, then written through to the
//! backend. A persistence failure is reported but never rolls back the
//! in-memory change: the table is the source of truth for the rest of
//! the session.

use chrono::NaiveDate;

use crate::config::{MonetaPaths, Settings};
use crate::error::{MonetaError, MonetaResult};
use crate::models::{Category, Money, Transaction, TransactionId, TransactionKind};
use crate::storage::{select_backend, BackendKind, TransactionStore};

/// Whether a mutation reached the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The change was written through to the active backend
    Persisted,
    /// The in-memory change stands, but the backend write failed
    Unpersisted(String),
}

impl SaveOutcome {
    /// True when the backend write succeeded
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted)
    }
}

/// Optional field changes for a transaction update
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub kind: Option<TransactionKind>,
    pub amount: Option<Money>,
    /// Some("") clears the account reference
    pub account: Option<String>,
}

impl TransactionPatch {
    fn apply(&self, tx: &Transaction) -> Transaction {
        let mut patched = tx.clone();
        if let Some(date) = self.date {
            patched.date = date;
        }
        if let Some(ref description) = self.description {
            patched.description = description.clone();
        }
        if let Some(category) = self.category {
            patched.category = category;
        }
        if let Some(kind) = self.kind {
            patched.kind = kind;
        }
        if let Some(amount) = self.amount {
            patched.amount = amount;
        }
        if let Some(ref account) = self.account {
            patched = patched.with_account(account.clone());
        }
        patched
    }
}

/// One user session: the loaded table plus the active backend
pub struct Session {
    table: Vec<Transaction>,
    store: Box<dyn TransactionStore>,
    backend: BackendKind,
    notices: Vec<String>,
}

impl Session {
    /// Open a session by running the backend fallback chain and loading
    /// the full table
    pub fn open(settings: &Settings, paths: &MonetaPaths) -> Self {
        let selection = select_backend(settings, paths);
        let backend = selection.kind();
        Self {
            table: selection.table,
            store: selection.store,
            backend,
            notices: selection.notices,
        }
    }

    /// Build a session from already-selected parts (used by tests)
    pub fn from_parts(
        store: Box<dyn TransactionStore>,
        table: Vec<Transaction>,
        notices: Vec<String>,
    ) -> Self {
        let backend = store.kind();
        Self {
            table,
            store,
            backend,
            notices,
        }
    }

    /// The loaded transaction table
    pub fn table(&self) -> &[Transaction] {
        &self.table
    }

    /// Backend indicator for the status display
    pub fn backend_kind(&self) -> BackendKind {
        self.backend
    }

    /// Whether mutations reach durable storage
    pub fn is_persistent(&self) -> bool {
        self.backend.is_persistent()
    }

    /// Downgrade notices recorded at selection time
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Look up a transaction by id
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.table.get(id.0)
    }

    /// Validate and append a transaction, then write through
    pub fn append(&mut self, tx: Transaction) -> MonetaResult<SaveOutcome> {
        tx.validate()?;

        self.table.push(tx.clone());
        Ok(match self.store.append(&tx) {
            Ok(()) => SaveOutcome::Persisted,
            Err(err) => SaveOutcome::Unpersisted(err.to_string()),
        })
    }

    /// Patch an existing transaction, then rewrite the table
    ///
    /// The patched row is validated before the table is touched, so a
    /// rejected edit leaves the table unchanged.
    pub fn update(&mut self, id: TransactionId, patch: &TransactionPatch) -> MonetaResult<SaveOutcome> {
        let existing = self
            .table
            .get(id.0)
            .ok_or_else(|| MonetaError::transaction_not_found(id.to_string()))?;

        let patched = patch.apply(existing);
        patched.validate()?;

        self.table[id.0] = patched;
        Ok(self.write_through())
    }

    /// Delete a transaction by id, then rewrite the table
    pub fn delete(&mut self, id: TransactionId) -> MonetaResult<SaveOutcome> {
        if id.0 >= self.table.len() {
            return Err(MonetaError::transaction_not_found(id.to_string()));
        }

        self.table.remove(id.0);
        Ok(self.write_through())
    }

    fn write_through(&mut self) -> SaveOutcome {
        match self.store.replace_all(&self.table) {
            Ok(()) => SaveOutcome::Persisted,
            Err(err) => SaveOutcome::Unpersisted(err.to_string()),
        }
    }
}
