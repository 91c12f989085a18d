//! Display formatting for terminal output
//!
//! Provides utilities for formatting the expense list and budget summary
//! for terminal display.

pub mod expense;

pub use expense::{format_budget_summary, format_expense_list, format_expense_row};
