//! The transition function: the state machine's sole mutation path
//!
//! Pure in the functional sense: never mutates its input, performs no I/O,
//! and is deterministic except for the fresh-id assignment inside
//! `AddExpense`. Persistence happens outside, via observers notified by the
//! hosting layer after each dispatch.

use crate::models::Expense;

use super::action::BudgetAction;
use super::budget::BudgetState;

/// Compute the next state from the current state and one action
pub fn transition(state: &BudgetState, action: BudgetAction) -> BudgetState {
    match action {
        BudgetAction::SetBudget { budget } => BudgetState {
            budget,
            ..state.clone()
        },

        BudgetAction::ShowModal => BudgetState {
            modal: true,
            ..state.clone()
        },

        BudgetAction::HideModal => BudgetState {
            modal: false,
            editing_id: None,
            ..state.clone()
        },

        BudgetAction::AddExpense { expense } => {
            let mut expenses = state.expenses.clone();
            expenses.push(Expense::from_draft(expense));
            BudgetState {
                expenses,
                modal: false,
                editing_id: None,
                ..state.clone()
            }
        }

        // Missing id: the filter retains every element, a silent no-op
        BudgetAction::RemoveExpense { id } => BudgetState {
            expenses: state
                .expenses
                .iter()
                .filter(|e| e.id != id)
                .cloned()
                .collect(),
            ..state.clone()
        },

        // Edit initiation is validated: a missing id leaves the state
        // unchanged instead of installing a dangling editing pointer
        BudgetAction::BeginEdit { id } => {
            if state.expense(id).is_some() {
                BudgetState {
                    modal: true,
                    editing_id: Some(id),
                    ..state.clone()
                }
            } else {
                state.clone()
            }
        }

        // Missing id: the mapped replace matches nothing, a silent no-op;
        // the modal still closes and the editing pointer still clears
        BudgetAction::UpdateExpense { expense } => BudgetState {
            expenses: state
                .expenses
                .iter()
                .map(|e| {
                    if e.id == expense.id {
                        expense.clone()
                    } else {
                        e.clone()
                    }
                })
                .collect(),
            modal: false,
            editing_id: None,
            ..state.clone()
        },

        BudgetAction::Reset => BudgetState {
            budget: 0.0,
            expenses: Vec::new(),
            ..state.clone()
        },

        BudgetAction::FilterCategory { id } => BudgetState {
            current_category: id,
            ..state.clone()
        },
    }
}
