//! Actions accepted by the budget state machine
//!
//! Every mutation of [`BudgetState`](super::BudgetState) is expressed as one
//! of these variants. The sum type is closed, so the transition function's
//! `match` is checked exhaustive by the compiler and no "unknown action"
//! case can reach it.

use crate::models::{CategoryId, DraftExpense, Expense, ExpenseId};

/// One discrete state mutation
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetAction {
    /// Replace the total budget
    SetBudget { budget: f64 },

    /// Open the add/edit entry surface
    ShowModal,

    /// Close the entry surface and drop any editing pointer
    HideModal,

    /// Persist a draft: assign a fresh id, append, close the modal
    AddExpense { expense: DraftExpense },

    /// Remove the expense with the given id; no-op when absent
    RemoveExpense { id: ExpenseId },

    /// Target an existing expense for editing; no-op when the id is absent
    BeginEdit { id: ExpenseId },

    /// Replace the expense whose id matches; close the modal either way
    UpdateExpense { expense: Expense },

    /// Zero the budget and empty the expense list
    Reset,

    /// Set or clear the category display filter
    FilterCategory { id: Option<CategoryId> },
}
