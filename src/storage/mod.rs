//! Storage layer for Moneta
//!
//! Transactions persist either to a remote spreadsheet, a local CSV file,
//! or (as a last resort) an ephemeral in-memory table. All three backends
//! share one contract and one tabular row encoding with the canonical
//! column header `date,description,category,type,amount,account`.

pub mod local;
pub mod memory;
pub mod remote;
pub mod selector;

pub use local::LocalCsvStore;
pub use memory::MemoryStore;
pub use remote::RemoteSheetStore;
pub use selector::{select_backend, BackendSelection};

use std::fmt;

use crate::error::{MonetaError, MonetaResult};
use crate::models::{Category, Money, Transaction, TransactionKind};

/// Canonical column header shared by the local file and the remote sheet
pub const COLUMNS: [&str; 6] = ["date", "description", "category", "type", "amount", "account"];

/// Which storage backend is active for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Networked spreadsheet reached with service credentials
    Remote,
    /// Delimited file on disk
    Local,
    /// Ephemeral table, lost on process exit
    Memory,
}

impl BackendKind {
    /// Whether mutations reach durable storage
    pub fn is_persistent(&self) -> bool {
        !matches!(self, Self::Memory)
    }

    /// Status badge text shown to the user
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Remote => "Connected to cloud spreadsheet",
            Self::Local => "Offline mode (local CSV)",
            Self::Memory => "Temporary memory (no persistence)",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "Remote"),
            Self::Local => write!(f, "Local"),
            Self::Memory => write!(f, "Memory"),
        }
    }
}

/// The contract every storage backend implements
///
/// Mutations beyond `append` rewrite the full table through `replace_all`;
/// the remote sheet additionally supports single-row appends so adding a
/// transaction does not re-upload the whole table.
pub trait TransactionStore {
    /// Backend indicator for the status display
    fn kind(&self) -> BackendKind;

    /// Load the full transaction table
    fn load(&mut self) -> MonetaResult<Vec<Transaction>>;

    /// Persist a single new transaction
    fn append(&mut self, tx: &Transaction) -> MonetaResult<()>;

    /// Persist the full table, replacing previous contents
    fn replace_all(&mut self, table: &[Transaction]) -> MonetaResult<()>;
}

/// Encode a transaction as a row in the canonical column order
pub fn encode_row(tx: &Transaction) -> [String; 6] {
    [
        tx.date.format("%Y-%m-%d").to_string(),
        tx.description.clone(),
        tx.category.label().to_string(),
        tx.kind.label().to_string(),
        tx.amount.to_string(),
        tx.account.clone().unwrap_or_default(),
    ]
}

/// Decode one data row into a transaction
///
/// Returns `Ok(None)` for rows with a blank description (the original data
/// files carry padding rows). Unknown category labels are coerced to the
/// kind's "Other" bucket, and amount signs are normalized to the row's
/// type, so tables written by other tools still load.
pub fn decode_row(fields: &[String], line: usize) -> MonetaResult<Option<Transaction>> {
    if fields.len() < 5 {
        return Err(MonetaError::Storage(format!(
            "row {}: expected at least 5 columns, found {}",
            line,
            fields.len()
        )));
    }

    let description = fields[1].trim();
    if description.is_empty() {
        return Ok(None);
    }

    let date = chrono::NaiveDate::parse_from_str(fields[0].trim(), "%Y-%m-%d")
        .map_err(|e| MonetaError::Storage(format!("row {}: invalid date: {}", line, e)))?;

    let kind: TransactionKind = fields[3]
        .parse()
        .map_err(|e| MonetaError::Storage(format!("row {}: {}", line, e)))?;

    let category = fields[2].parse::<Category>().unwrap_or(match kind {
        TransactionKind::Expense => Category::OtherExpense,
        TransactionKind::Income => Category::OtherIncome,
    });

    let raw_amount = Money::parse(fields[4].trim())
        .map_err(|e| MonetaError::Storage(format!("row {}: {}", line, e)))?;
    let amount = match kind {
        TransactionKind::Income => raw_amount.abs(),
        TransactionKind::Expense => -raw_amount.abs(),
    };

    let account = fields.get(5).map(|s| s.trim()).filter(|s| !s.is_empty());

    let mut tx = Transaction::new(date, description, category, kind, amount);
    if let Some(account) = account {
        tx = tx.with_account(account);
    }

    Ok(Some(tx))
}

/// Check whether a row looks like the canonical header (case-insensitive)
pub fn is_header_row(fields: &[String]) -> bool {
    fields
        .first()
        .map(|f| f.trim().eq_ignore_ascii_case(COLUMNS[0]))
        .unwrap_or(false)
}
