use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use outlay::cli::{handle_budget_command, handle_expense_command};
use outlay::config::{paths::OutlayPaths, settings::Settings};
use outlay::models::CategoryCatalog;
use outlay::storage::{JsonFileStore, StatePersister};

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Personal budget and expense tracker",
    long_about = "outlay is a personal budget and expense tracker for the \
                  command line. Set a total budget, record expenses against \
                  it, and see at a glance how much is left."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget management commands
    #[command(subcommand)]
    Budget(outlay::cli::BudgetCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(outlay::cli::ExpenseCommands),

    /// List the available expense categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = OutlayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let catalog = CategoryCatalog::standard();

    let mut persister = StatePersister::new(JsonFileStore::open(paths.state_file())?);

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut persister, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut persister, &settings, &catalog, cmd)?;
        }
        Some(Commands::Categories) => {
            println!("Available categories:");
            for category in catalog.iter() {
                println!("  {:15} {}", category.id, category.name);
            }
        }
        Some(Commands::Config) => {
            println!("outlay Configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("State file:       {}", paths.state_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("outlay - Personal budget and expense tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
            println!("Run 'outlay budget set <amount>' to get started.");
        }
    }

    Ok(())
}
