use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use expense_tracker::cli::{
    handle_categories_command, handle_export_command, handle_history_command,
    handle_summary_command, handle_transaction_command, ExportCommands, TransactionCommands,
};
use expense_tracker::config::paths::{TrackerPaths, DATA_DIR_ENV};
use expense_tracker::config::settings::Settings;
use expense_tracker::display::Notification;
use expense_tracker::storage::{LoadStatus, Storage};

/// Environment variable holding the log filter
const LOG_ENV: &str = "EXPENSE_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track income and expenses from the terminal",
    long_about = "Record income and expenses, see your balance and where the money \
                  goes, and export everything to CSV or a printable report. \
                  All data stays on this machine."
)]
struct Cli {
    /// Directory holding settings, data and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Show total balance, income, expenses and spending by category
    Summary,

    /// List the preset categories
    Categories,

    /// Export transactions
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent additions and deletions
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            Notification::error(format!("{:#}", e)).show();
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new().context("Could not determine the data directory")?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);
    match storage.load_all() {
        LoadStatus::Recovered(e) => Notification::warning(format!(
            "Could not load saved transactions, starting with an empty list ({})",
            e
        ))
        .show(),
        LoadStatus::Loaded(count) => tracing::debug!(count, "transactions loaded"),
        LoadStatus::Empty => {}
    }

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary_command(&storage, &settings)?,
        Some(Commands::Categories) => handle_categories_command(&settings)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, &settings, cmd)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized expense tracker at: {}", paths.base_dir().display());
            println!();
            println!("Run 'expense add \"Lunch\" 50 --category Food' to record your first expense.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default category: {}", settings.default_category);
            println!("  Audit enabled:    {}", settings.audit_enabled);
        }
        None => {
            println!("expense - track income and expenses");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
