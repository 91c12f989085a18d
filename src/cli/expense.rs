//! Expense CLI commands
//!
//! Implements CLI commands for recording, editing, removing, and listing
//! expenses. Every mutation goes through the expense form and the store;
//! no business rule lives here.

use chrono::NaiveDate;
use clap::Subcommand;
use tracing::warn;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{OutlayError, OutlayResult};
use crate::form::ExpenseForm;
use crate::models::{CategoryCatalog, CategoryId, ExpenseId};
use crate::state::{BudgetAction, BudgetState, BudgetStore};
use crate::storage::{KeyValueStore, StateObserver, StatePersister};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense name
        #[arg(short, long)]
        name: String,
        /// Amount (e.g., "12.50")
        #[arg(short, long)]
        amount: String,
        /// Category id (see 'outlay categories')
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Edit an existing expense in place
    Edit {
        /// Expense id (full UUID, or the short "exp-" form shown in listings)
        id: String,
        /// New expense name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category id
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    Rm {
        /// Expense id (full UUID, or the short "exp-" form shown in listings)
        id: String,
    },

    /// List expenses, optionally filtered by category
    List {
        /// Show only this category (omit to clear the filter)
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    persister: &mut StatePersister<S>,
    settings: &Settings,
    catalog: &CategoryCatalog,
    cmd: ExpenseCommands,
) -> OutlayResult<()> {
    let mut store = BudgetStore::new(persister.hydrate()?);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let mut form = ExpenseForm::new();
            form.set_name(name);
            form.set_amount(&amount);
            form.set_category(CategoryId::new(category));
            if let Some(raw) = date {
                form.set_date(parse_date(&raw)?);
            }

            let action = form.submit(store.state())?;
            store.dispatch(action);
            persister.state_changed(store.state())?;

            let added = store.state().expenses.last().expect("just appended");
            println!("Recorded expense {} ({})", added.expense_name, added.id);
        }

        ExpenseCommands::Edit {
            id,
            name,
            amount,
            category,
            date,
        } => {
            let id = resolve_id(store.state(), &id)?;
            store.dispatch(BudgetAction::BeginEdit { id });
            if store.state().editing_id.is_none() {
                // Validated edit initiation left the state unchanged
                warn!(%id, "edit target not found");
                return Err(OutlayError::expense_not_found(id.to_string()));
            }

            let mut form = ExpenseForm::new();
            form.sync_editing(store.state());
            if let Some(name) = name {
                form.set_name(name);
            }
            if let Some(amount) = amount {
                form.set_amount(&amount);
            }
            if let Some(category) = category {
                form.set_category(CategoryId::new(category));
            }
            if let Some(raw) = date {
                form.set_date(parse_date(&raw)?);
            }

            let action = form.submit(store.state())?;
            store.dispatch(action);
            persister.state_changed(store.state())?;

            let updated = store.state().expense(id).expect("just replaced");
            println!("Updated expense {} ({})", updated.expense_name, updated.id);
        }

        ExpenseCommands::Rm { id } => {
            let id = resolve_id(store.state(), &id)?;
            store.dispatch(BudgetAction::RemoveExpense { id });
            persister.state_changed(store.state())?;
            // Removal of a missing id is a silent no-op in the store
            println!("{} expense(s) remaining.", store.state().expenses.len());
        }

        ExpenseCommands::List { category } => {
            store.dispatch(BudgetAction::FilterCategory {
                id: category.map(CategoryId::new),
            });
            let state = store.state();
            print!(
                "{}",
                format_expense_list(&state.visible_expenses(), catalog, settings)
            );
        }
    }

    Ok(())
}

/// Resolve user-entered id input against the loaded state
///
/// A full canonical UUID (with or without the "exp-" prefix) resolves
/// without a lookup, so the store's silent-no-op policy for missing ids is
/// preserved. Anything shorter is treated as a prefix of the UUID, the form
/// the listings print; it must match exactly one expense.
fn resolve_id(state: &BudgetState, raw: &str) -> OutlayResult<ExpenseId> {
    if let Ok(id) = raw.parse::<ExpenseId>() {
        return Ok(id);
    }

    let prefix = raw.strip_prefix("exp-").unwrap_or(raw);
    if prefix.is_empty() {
        return Err(OutlayError::Validation(format!("Invalid expense id: {}", raw)));
    }

    let mut matches = state
        .expenses
        .iter()
        .filter(|e| e.id.as_uuid().to_string().starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(expense), None) => Ok(expense.id),
        (Some(_), Some(_)) => Err(OutlayError::Validation(format!(
            "Ambiguous expense id: {}",
            raw
        ))),
        (None, _) => Err(OutlayError::expense_not_found(raw.to_string())),
    }
}

fn parse_date(raw: &str) -> OutlayResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| OutlayError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", raw)))
}
