//! Budget CLI commands
//!
//! Implements CLI commands for setting, showing, and resetting the total
//! budget.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_summary;
use crate::error::OutlayResult;
use crate::state::{BudgetAction, BudgetStore};
use crate::storage::{KeyValueStore, StateObserver, StatePersister};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the total budget
    Set {
        /// New budget amount (e.g., "500" or "500.00")
        amount: f64,
    },

    /// Show budget, spent, and remaining amounts
    Show,

    /// Reset the budget to zero and delete all expenses
    Reset,
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    persister: &mut StatePersister<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> OutlayResult<()> {
    let mut store = BudgetStore::new(persister.hydrate()?);

    match cmd {
        BudgetCommands::Set { amount } => {
            store.dispatch(BudgetAction::SetBudget { budget: amount });
            persister.state_changed(store.state())?;
            println!(
                "Budget set to {}{:.2}",
                settings.currency_symbol, store.state().budget
            );
        }
        BudgetCommands::Show => {
            print!("{}", format_budget_summary(store.state(), settings));
        }
        BudgetCommands::Reset => {
            store.dispatch(BudgetAction::Reset);
            persister.state_changed(store.state())?;
            println!("Budget reset. All expenses deleted.");
        }
    }

    Ok(())
}
