use anyhow::Result;
use clap::{Parser, Subcommand};

use moneta::cli::{
    handle_config_command, handle_report_command, handle_transaction_command, ConfigCommands,
    ReportCommands, TransactionCommands,
};
use moneta::config::{MonetaPaths, Settings};
use moneta::display::format_session_status;
use moneta::services::Session;

#[derive(Parser)]
#[command(
    name = "moneta",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "Moneta tracks income and expenses in a single transaction table. \
                  It syncs to a remote spreadsheet when one is reachable, falls back \
                  to a local CSV file when it is not, and keeps working in memory \
                  as a last resort."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Show which storage backend the session is using
    Status,

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MonetaPaths::new()?;

    match cli.command {
        Commands::Transaction(cmd) => {
            let settings = Settings::load_or_create(&paths)?;
            let mut session = Session::open(&settings, &paths);
            print_notices(&session);
            handle_transaction_command(&mut session, cmd)?;
        }
        Commands::Report(cmd) => {
            let settings = Settings::load_or_create(&paths)?;
            let session = Session::open(&settings, &paths);
            print_notices(&session);
            handle_report_command(&session, &settings, cmd)?;
        }
        Commands::Status => {
            let settings = Settings::load_or_create(&paths)?;
            let session = Session::open(&settings, &paths);
            print!("{}", format_session_status(&session));
        }
        Commands::Config(cmd) => {
            handle_config_command(&paths, cmd)?;
        }
    }

    Ok(())
}

/// Surface backend downgrades on stderr so they show regardless of command
fn print_notices(session: &Session) {
    for notice in session.notices() {
        eprintln!("note: {}", notice);
    }
}
