//! The budget state aggregate and its derived queries

use serde::{Deserialize, Serialize};

use crate::models::{CategoryId, Expense, ExpenseId};

/// Root state aggregate, exclusively owned by the store
///
/// Mutated only by replacement through the transition function; observers
/// read it, never write it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetState {
    /// Total budget set by the user
    pub budget: f64,

    /// Whether the add/edit entry surface is open
    pub modal: bool,

    /// Recorded expenses, insertion order preserved
    pub expenses: Vec<Expense>,

    /// Editing pointer: the expense currently targeted for in-place edit
    pub editing_id: Option<ExpenseId>,

    /// Category display filter; `None` means unfiltered
    pub current_category: Option<CategoryId>,
}

impl BudgetState {
    /// State with a budget but nothing recorded yet
    pub fn with_budget(budget: f64) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    /// Sum of all recorded expense amounts
    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget left after spending (may be negative)
    pub fn remaining(&self) -> f64 {
        self.budget - self.total_spent()
    }

    /// Percentage of the budget spent, `0.0` when no budget is set
    pub fn spent_percentage(&self) -> f64 {
        if self.budget == 0.0 {
            0.0
        } else {
            self.total_spent() / self.budget * 100.0
        }
    }

    /// Look up an expense by id (first match)
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// The expenses passing the current category filter, in stored order
    pub fn visible_expenses(&self) -> Vec<&Expense> {
        match &self.current_category {
            None => self.expenses.iter().collect(),
            Some(category) => self
                .expenses
                .iter()
                .filter(|e| &e.category == category)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DraftExpense;
    use chrono::NaiveDate;

    fn expense(name: &str, amount: f64, category: &str) -> Expense {
        Expense::from_draft(DraftExpense {
            expense_name: name.to_string(),
            amount,
            category: CategoryId::new(category),
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        })
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = BudgetState::default();
        assert_eq!(state.budget, 0.0);
        assert!(!state.modal);
        assert!(state.expenses.is_empty());
        assert!(state.editing_id.is_none());
        assert!(state.current_category.is_none());
    }

    #[test]
    fn test_totals() {
        let mut state = BudgetState::with_budget(100.0);
        state.expenses.push(expense("Coffee", 5.0, "food"));
        state.expenses.push(expense("Gym", 20.0, "health"));

        assert_eq!(state.total_spent(), 25.0);
        assert_eq!(state.remaining(), 75.0);
        assert_eq!(state.spent_percentage(), 25.0);
    }

    #[test]
    fn test_spent_percentage_zero_budget() {
        let mut state = BudgetState::default();
        state.expenses.push(expense("Coffee", 5.0, "food"));
        assert_eq!(state.spent_percentage(), 0.0);
    }

    #[test]
    fn test_visible_expenses_filtered() {
        let mut state = BudgetState::default();
        state.expenses.push(expense("Coffee", 5.0, "food"));
        state.expenses.push(expense("Gym", 20.0, "health"));
        state.expenses.push(expense("Lunch", 12.0, "food"));

        assert_eq!(state.visible_expenses().len(), 3);

        state.current_category = Some(CategoryId::new("food"));
        let visible = state.visible_expenses();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].expense_name, "Coffee");
        assert_eq!(visible[1].expense_name, "Lunch");
    }

    #[test]
    fn test_expense_lookup() {
        let mut state = BudgetState::default();
        let coffee = expense("Coffee", 5.0, "food");
        let id = coffee.id;
        state.expenses.push(coffee);

        assert_eq!(state.expense(id).unwrap().expense_name, "Coffee");
        assert!(state.expense(ExpenseId::new()).is_none());
    }
}
