//! User settings for Moneta
//!
//! Manages user preferences: the configured initial balance, the currency
//! symbol used for display, and the name of the remote spreadsheet.

use serde::{Deserialize, Serialize};

use super::paths::MonetaPaths;
use crate::error::MonetaError;
use crate::models::Money;

/// User settings for Moneta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Balance carried from before the first recorded transaction, in cents
    #[serde(default)]
    pub initial_balance: Money,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Name of the remote spreadsheet to open
    #[serde(default = "default_spreadsheet_name")]
    pub spreadsheet_name: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_spreadsheet_name() -> String {
    "Moneta Transactions".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            initial_balance: Money::zero(),
            currency_symbol: default_currency(),
            spreadsheet_name: default_spreadsheet_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MonetaPaths) -> Result<Self, MonetaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                MonetaError::FileAccess(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MonetaError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MonetaPaths) -> Result<(), MonetaError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MonetaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            MonetaError::FileAccess(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.initial_balance, Money::zero());
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.spreadsheet_name, "Moneta Transactions");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonetaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.initial_balance = Money::from_cents(50_000);
        settings.currency_symbol = "R$".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.initial_balance, Money::from_cents(50_000));
        assert_eq!(loaded.currency_symbol, "R$");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonetaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.initial_balance, Money::zero());
    }
}
