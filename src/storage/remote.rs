//! Remote spreadsheet storage backend
//!
//! Talks to a tabular spreadsheet service over HTTP using a service-account
//! credential file. The sheet carries the same column layout as the local
//! CSV file. Credential acquisition is an external concern; this module
//! only reads the file.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::{MonetaError, MonetaResult};
use crate::models::Transaction;

use super::{decode_row, encode_row, is_header_row, BackendKind, TransactionStore, COLUMNS};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Service-account credential file contents
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCredentials {
    /// Base URL of the spreadsheet service API
    pub api_base: String,
    /// Bearer token issued to the service account
    pub token: String,
}

impl RemoteCredentials {
    /// Load credentials from disk
    ///
    /// A missing or malformed file is a credential error, which triggers
    /// the backend fallback rather than aborting the session.
    pub fn load(path: &Path) -> MonetaResult<Self> {
        if !path.exists() {
            return Err(MonetaError::Credential(format!(
                "credential file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            MonetaError::Credential(format!("cannot read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            MonetaError::Credential(format!("malformed credential file: {}", e))
        })
    }
}

/// Wire format of the sheet values endpoints
#[derive(Debug, Serialize, Deserialize)]
struct SheetValues {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Spreadsheet-backed transaction store
pub struct RemoteSheetStore {
    client: Client,
    values_url: String,
}

impl RemoteSheetStore {
    /// Connect to the remote spreadsheet and fetch the table once
    ///
    /// Fetching at connect time verifies both the credentials and the
    /// sheet layout before the backend is selected.
    pub fn connect(
        credentials_path: &Path,
        spreadsheet_name: &str,
    ) -> MonetaResult<(Self, Vec<Transaction>)> {
        let credentials = RemoteCredentials::load(credentials_path)?;

        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", credentials.token);
        let value = HeaderValue::from_str(&bearer)
            .map_err(|_| MonetaError::Credential("token contains invalid characters".into()))?;
        headers.insert(AUTHORIZATION, value);

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| MonetaError::Connectivity(format!("cannot build HTTP client: {}", e)))?;

        let values_url = format!(
            "{}/spreadsheets/{}/values",
            credentials.api_base.trim_end_matches('/'),
            urlencode(spreadsheet_name)
        );

        let mut store = Self { client, values_url };
        let table = store.load()?;
        Ok((store, table))
    }

    fn fetch_values(&self) -> MonetaResult<SheetValues> {
        let response = self
            .client
            .get(&self.values_url)
            .send()
            .map_err(connectivity_error)?;
        let response = check_status(response)?;

        response
            .json()
            .map_err(|e| MonetaError::Storage(format!("malformed sheet payload: {}", e)))
    }

    fn push_values(&self, url: &str, body: &SheetValues, replace: bool) -> MonetaResult<()> {
        let request = if replace {
            self.client.put(url)
        } else {
            self.client.post(url)
        };

        let response = request.json(body).send().map_err(connectivity_error)?;
        check_status(response)?;
        Ok(())
    }

    fn header_row() -> Vec<String> {
        COLUMNS.iter().map(|s| s.to_string()).collect()
    }
}

impl TransactionStore for RemoteSheetStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    fn load(&mut self) -> MonetaResult<Vec<Transaction>> {
        let payload = self.fetch_values()?;

        let mut table = Vec::new();
        for (idx, row) in payload.values.iter().enumerate() {
            if idx == 0 && is_header_row(row) {
                continue;
            }
            if let Some(tx) = decode_row(row, idx + 1)? {
                table.push(tx);
            }
        }

        Ok(table)
    }

    fn append(&mut self, tx: &Transaction) -> MonetaResult<()> {
        let url = format!("{}:append", self.values_url);
        let body = SheetValues {
            values: vec![encode_row(tx).to_vec()],
        };
        self.push_values(&url, &body, false)
    }

    fn replace_all(&mut self, table: &[Transaction]) -> MonetaResult<()> {
        let mut values = Vec::with_capacity(table.len() + 1);
        values.push(Self::header_row());
        values.extend(table.iter().map(|tx| encode_row(tx).to_vec()));

        let body = SheetValues { values };
        let url = self.values_url.clone();
        self.push_values(&url, &body, true)
    }
}

fn connectivity_error(err: reqwest::Error) -> MonetaError {
    MonetaError::Connectivity(err.to_string())
}

fn check_status(
    response: reqwest::blocking::Response,
) -> MonetaResult<reqwest::blocking::Response> {
    match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(MonetaError::Credential(format!(
            "service rejected credentials ({})",
            response.status()
        ))),
        status if !status.is_success() => Err(MonetaError::Storage(format!(
            "spreadsheet service returned {}",
            status
        ))),
        _ => Ok(response),
    }
}

/// Minimal percent-encoding for the spreadsheet name path segment
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_credentials_is_credential_error() {
        let dir = TempDir::new().unwrap();
        let err = RemoteCredentials::load(&dir.path().join("credentials.json")).unwrap_err();
        assert!(matches!(err, MonetaError::Credential(_)));
    }

    #[test]
    fn test_malformed_credentials_is_credential_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = RemoteCredentials::load(&path).unwrap_err();
        assert!(matches!(err, MonetaError::Credential(_)));
    }

    #[test]
    fn test_credentials_parse() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(
            &path,
            r#"{"api_base": "https://sheets.example.com/v1/", "token": "abc123"}"#,
        )
        .unwrap();

        let creds = RemoteCredentials::load(&path).unwrap();
        assert_eq!(creds.api_base, "https://sheets.example.com/v1/");
        assert_eq!(creds.token, "abc123");
    }

    #[test]
    fn test_urlencode() {
        assert_eq!(urlencode("Moneta Transactions"), "Moneta%20Transactions");
        assert_eq!(urlencode("plain-name_1.0"), "plain-name_1.0");
    }

    #[test]
    fn test_connect_without_credentials_fails_fast() {
        let dir = TempDir::new().unwrap();
        let result = RemoteSheetStore::connect(&dir.path().join("credentials.json"), "Sheet");
        assert!(matches!(result, Err(MonetaError::Credential(_))));
    }
}
