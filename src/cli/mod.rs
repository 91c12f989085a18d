//! CLI command handlers for outlay
//!
//! Each handler hydrates the state, dispatches actions through the store,
//! and notifies the persistence observer. The CLI is a hosting layer only.

pub mod budget;
pub mod expense;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
