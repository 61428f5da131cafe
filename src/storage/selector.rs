//! Backend selection
//!
//! Deterministic fallback chain, attempted once per session:
//! remote spreadsheet, then local CSV file, then ephemeral memory.
//! Each downgrade records a notice for the status display; selection
//! itself never fails.

use crate::config::{MonetaPaths, Settings};
use crate::models::Transaction;

use super::{BackendKind, LocalCsvStore, MemoryStore, RemoteSheetStore, TransactionStore};

/// Result of running the fallback chain
pub struct BackendSelection {
    /// The active store
    pub store: Box<dyn TransactionStore>,
    /// The table as loaded from the active store
    pub table: Vec<Transaction>,
    /// Downgrade notices accumulated along the chain
    pub notices: Vec<String>,
}

impl BackendSelection {
    /// Backend indicator of the selected store
    pub fn kind(&self) -> BackendKind {
        self.store.kind()
    }
}

/// Run the fallback chain and return the first backend that initializes
pub fn select_backend(settings: &Settings, paths: &MonetaPaths) -> BackendSelection {
    let mut notices = Vec::new();

    match RemoteSheetStore::connect(&paths.credentials_file(), &settings.spreadsheet_name) {
        Ok((store, table)) => {
            return BackendSelection {
                store: Box::new(store),
                table,
                notices,
            }
        }
        Err(err) => {
            notices.push(format!(
                "Remote spreadsheet unavailable ({}); falling back to local file",
                err
            ));
        }
    }

    match open_local(paths) {
        Ok((store, table)) => {
            return BackendSelection {
                store: Box::new(store),
                table,
                notices,
            }
        }
        Err(err) => {
            notices.push(format!(
                "Local file unavailable ({}); using temporary in-memory table, \
                 changes will be lost on exit",
                err
            ));
        }
    }

    BackendSelection {
        store: Box::new(MemoryStore::new()),
        table: Vec::new(),
        notices,
    }
}

fn open_local(
    paths: &MonetaPaths,
) -> Result<(LocalCsvStore, Vec<Transaction>), crate::error::MonetaError> {
    paths.ensure_directories()?;
    let mut store = LocalCsvStore::open(paths.transactions_file())?;
    let table = store.load()?;
    Ok((store, table))
}
