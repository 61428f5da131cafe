//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{MonetaPaths, Settings};
use crate::error::{MonetaError, MonetaResult};
use crate::models::Money;

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show resolved paths and current settings
    Show,
    /// Create the data directories and write default settings
    Init,
    /// Change a setting
    Set {
        /// Balance carried from before the first recorded transaction
        #[arg(long)]
        initial_balance: Option<String>,
        /// Currency symbol used for display
        #[arg(long)]
        currency: Option<String>,
        /// Name of the remote spreadsheet to open
        #[arg(long)]
        spreadsheet: Option<String>,
    },
}

/// Handle a configuration subcommand
pub fn handle_config_command(paths: &MonetaPaths, cmd: ConfigCommands) -> MonetaResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let settings = Settings::load_or_create(paths)?;

            println!("Paths:");
            println!("  base:         {}", paths.base_dir().display());
            println!("  settings:     {}", paths.settings_file().display());
            println!("  credentials:  {}", paths.credentials_file().display());
            println!("  transactions: {}", paths.transactions_file().display());
            println!();
            println!("Settings:");
            println!(
                "  initial balance: {}",
                settings.initial_balance.format_with_symbol(&settings.currency_symbol)
            );
            println!("  currency symbol: {}", settings.currency_symbol);
            println!("  spreadsheet:     {}", settings.spreadsheet_name);
        }
        ConfigCommands::Init => {
            paths.ensure_directories()?;
            if paths.settings_file().exists() {
                println!("Settings already exist at {}", paths.settings_file().display());
            } else {
                Settings::default().save(paths)?;
                println!("Created {}", paths.settings_file().display());
            }
        }
        ConfigCommands::Set {
            initial_balance,
            currency,
            spreadsheet,
        } => {
            if initial_balance.is_none() && currency.is_none() && spreadsheet.is_none() {
                return Err(MonetaError::validation(
                    "setting",
                    "nothing to change; pass --initial-balance, --currency, or --spreadsheet",
                ));
            }

            let mut settings = Settings::load_or_create(paths)?;

            if let Some(raw) = initial_balance {
                settings.initial_balance = Money::parse(&raw)
                    .map_err(|e| MonetaError::validation("initial-balance", e.to_string()))?;
            }
            if let Some(currency) = currency {
                if currency.trim().is_empty() {
                    return Err(MonetaError::validation(
                        "currency",
                        "currency symbol cannot be empty",
                    ));
                }
                settings.currency_symbol = currency;
            }
            if let Some(spreadsheet) = spreadsheet {
                if spreadsheet.trim().is_empty() {
                    return Err(MonetaError::validation(
                        "spreadsheet",
                        "spreadsheet name cannot be empty",
                    ));
                }
                settings.spreadsheet_name = spreadsheet;
            }

            settings.save(paths)?;
            println!("Settings updated.");
        }
    }

    Ok(())
}
