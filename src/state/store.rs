//! The budget store: owns the state, applies actions synchronously
//!
//! Single-threaded, single-writer. Every write funnels through
//! [`BudgetStore::dispatch`]; each dispatch runs one transition to
//! completion before the next is accepted. The store never touches storage;
//! the hosting layer persists after each dispatch through an observer.

use tracing::debug;

use super::action::BudgetAction;
use super::budget::BudgetState;
use super::reducer::transition;

/// Exclusive owner of the current [`BudgetState`]
#[derive(Debug, Clone, Default)]
pub struct BudgetStore {
    state: BudgetState,
}

impl BudgetStore {
    /// Wrap a hydrated state
    pub fn new(state: BudgetState) -> Self {
        Self { state }
    }

    /// Read access to the current state
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Apply exactly one action and replace the owned state
    pub fn dispatch(&mut self, action: BudgetAction) -> &BudgetState {
        debug!(?action, "dispatching action");
        self.state = transition(&self.state, action);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, DraftExpense};
    use chrono::NaiveDate;

    fn draft() -> DraftExpense {
        DraftExpense {
            expense_name: "Coffee".to_string(),
            amount: 5.0,
            category: CategoryId::new("food"),
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        }
    }

    #[test]
    fn test_dispatch_replaces_state() {
        let mut store = BudgetStore::new(BudgetState::default());
        store.dispatch(BudgetAction::SetBudget { budget: 300.0 });
        assert_eq!(store.state().budget, 300.0);

        store.dispatch(BudgetAction::AddExpense { expense: draft() });
        assert_eq!(store.state().expenses.len(), 1);
    }

    #[test]
    fn test_dispatch_returns_new_state() {
        let mut store = BudgetStore::default();
        let state = store.dispatch(BudgetAction::ShowModal);
        assert!(state.modal);
    }
}
