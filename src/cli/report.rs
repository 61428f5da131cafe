//! Reporting CLI commands

use clap::Subcommand;

use crate::cli::transaction::parse_period_filter;
use crate::config::Settings;
use crate::display::format_summary;
use crate::error::MonetaResult;
use crate::models::{Category, Period, TransactionKind};
use crate::reports::summarize;
use crate::services::Session;

/// Reporting subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show income, expenses, and balances for a period
    Summary {
        /// Month to summarize (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Summarize the whole table instead of one month
        #[arg(long, conflicts_with = "month")]
        all: bool,
    },
    /// List the available categories
    Categories,
}

/// Handle a reporting subcommand
pub fn handle_report_command(
    session: &Session,
    settings: &Settings,
    cmd: ReportCommands,
) -> MonetaResult<()> {
    match cmd {
        ReportCommands::Summary { month, all } => {
            let period = if all {
                Period::AllTime
            } else {
                match month {
                    Some(_) => parse_period_filter(month.as_deref())?,
                    None => Period::current_month(),
                }
            };

            let today = chrono::Local::now().date_naive();
            let summary = summarize(session.table(), period, settings.initial_balance, today);
            print!("{}", format_summary(&summary, &settings.currency_symbol));
        }
        ReportCommands::Categories => {
            println!("Expense categories:");
            for category in Category::for_kind(TransactionKind::Expense) {
                if !category.is_transfer() {
                    println!("  {}", category.label());
                }
            }
            println!();
            println!("Income categories:");
            for category in Category::for_kind(TransactionKind::Income) {
                if !category.is_transfer() {
                    println!("  {}", category.label());
                }
            }
            println!();
            println!("Either:");
            println!("  {}", Category::Transfer.label());
        }
    }

    Ok(())
}
