//! Local CSV storage backend
//!
//! Persists the transaction table to a delimited file on disk with the
//! canonical column header. Writes go to a temp file first and are renamed
//! into place so a failed write never corrupts the table.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MonetaError, MonetaResult};
use crate::models::Transaction;

use super::{decode_row, encode_row, is_header_row, BackendKind, TransactionStore, COLUMNS};

/// CSV-file backed transaction store
pub struct LocalCsvStore {
    path: PathBuf,
}

impl LocalCsvStore {
    /// Open the store, creating an empty table with the canonical header
    /// if the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> MonetaResult<Self> {
        let store = Self { path: path.into() };

        if !store.path.exists() {
            store.write_rows(&[])?;
        } else {
            // Surface unreadable files now rather than on first load
            fs::File::open(&store.path).map_err(|e| {
                MonetaError::FileAccess(format!(
                    "Cannot open {}: {}",
                    store.path.display(),
                    e
                ))
            })?;
        }

        Ok(store)
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_rows(&self, table: &[Transaction]) -> MonetaResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MonetaError::FileAccess(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory so the rename stays atomic
        let temp_path = self.path.with_extension("csv.tmp");

        {
            let mut writer = csv::Writer::from_path(&temp_path).map_err(|e| {
                MonetaError::FileAccess(format!(
                    "Failed to write {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            writer
                .write_record(COLUMNS)
                .map_err(|e| MonetaError::FileAccess(format!("Failed to write header: {}", e)))?;

            for tx in table {
                writer
                    .write_record(encode_row(tx))
                    .map_err(|e| MonetaError::FileAccess(format!("Failed to write row: {}", e)))?;
            }

            writer
                .flush()
                .map_err(|e| MonetaError::FileAccess(format!("Failed to flush: {}", e)))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            MonetaError::FileAccess(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

impl TransactionStore for LocalCsvStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Local
    }

    fn load(&mut self) -> MonetaResult<Vec<Transaction>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                MonetaError::FileAccess(format!("Cannot read {}: {}", self.path.display(), e))
            })?;

        let mut table = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                MonetaError::Storage(format!("{}: {}", self.path.display(), e))
            })?;
            let fields: Vec<String> = record.iter().map(|f| f.to_string()).collect();

            if idx == 0 && is_header_row(&fields) {
                continue;
            }

            if let Some(tx) = decode_row(&fields, idx + 1)? {
                table.push(tx);
            }
        }

        Ok(table)
    }

    fn append(&mut self, tx: &Transaction) -> MonetaResult<()> {
        // Read-modify-write keeps the header canonical even for files
        // created by other tools
        let mut table = self.load()?;
        table.push(tx.clone());
        self.write_rows(&table)
    }

    fn replace_all(&mut self, table: &[Transaction]) -> MonetaResult<()> {
        self.write_rows(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_table() -> Vec<Transaction> {
        vec![
            Transaction::new(
                date(2024, 1, 5),
                "Paycheck",
                Category::Salary,
                TransactionKind::Income,
                Money::from_cents(100_000),
            )
            .with_account("Checking"),
            Transaction::new(
                date(2024, 1, 10),
                "Groceries, weekly",
                Category::Groceries,
                TransactionKind::Expense,
                Money::from_cents(-20_000),
            ),
        ]
    }

    #[test]
    fn test_open_creates_file_with_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        let mut store = LocalCsvStore::open(&path).unwrap();

        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("date,description,category,type,amount,account"));
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        let table = sample_table();

        let mut store = LocalCsvStore::open(&path).unwrap();
        store.replace_all(&table).unwrap();

        // Reload through a fresh store to prove durability
        let mut reopened = LocalCsvStore::open(&path).unwrap();
        assert_eq!(reopened.load().unwrap(), table);
    }

    #[test]
    fn test_append_preserves_existing_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        let table = sample_table();

        let mut store = LocalCsvStore::open(&path).unwrap();
        store.replace_all(&table[..1].to_vec()).unwrap();
        store.append(&table[1]).unwrap();

        assert_eq!(store.load().unwrap(), table);
    }

    #[test]
    fn test_quoted_fields_survive() {
        // Descriptions with commas must round-trip intact
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        let tx = Transaction::new(
            date(2024, 3, 1),
            "Dinner, drinks \"and more\"",
            Category::Leisure,
            TransactionKind::Expense,
            Money::from_cents(-7_550),
        );

        let mut store = LocalCsvStore::open(&path).unwrap();
        store.replace_all(std::slice::from_ref(&tx)).unwrap();
        assert_eq!(store.load().unwrap(), vec![tx]);
    }

    #[test]
    fn test_open_missing_parent_dir_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("transactions.csv");
        let store = LocalCsvStore::open(&path);
        assert!(store.is_ok());
        assert!(path.exists());
    }
}
