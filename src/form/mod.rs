//! The expense form: the input-collection boundary of the state machine
//!
//! The form owns a draft expense, reflects an externally-signaled edit
//! target into it, validates on submit, and produces exactly one action per
//! successful submit. It never dispatches and never touches storage; the
//! hosting layer dispatches the returned action.

use chrono::NaiveDate;

use crate::error::{OutlayError, OutlayResult};
use crate::models::{CategoryId, DraftExpense, Expense};
use crate::state::{BudgetAction, BudgetState};

/// Validation message shown when any required field is empty
pub const ALL_FIELDS_REQUIRED: &str = "all fields are required";

/// Collects expense fields and turns them into add/update actions
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    draft: DraftExpense,
    error: Option<String>,
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the edit target's fields into the draft
    ///
    /// When the state carries an editing pointer, the first matching expense
    /// is copied into the draft. No match leaves the draft unchanged.
    pub fn sync_editing(&mut self, state: &BudgetState) {
        if let Some(id) = state.editing_id {
            if let Some(expense) = state.expense(id) {
                self.draft = DraftExpense::from_expense(expense);
            }
        }
    }

    /// Replace the draft's name field
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.expense_name = name.into();
    }

    /// Coerce raw amount input to a number; unparseable input becomes `0.0`,
    /// which the submit-time validity check then rejects
    pub fn set_amount(&mut self, raw: &str) {
        self.draft.amount = raw.trim().parse().unwrap_or(0.0);
    }

    /// Replace the draft's category field
    pub fn set_category(&mut self, category: CategoryId) {
        self.draft.category = category;
    }

    /// Replace the draft's date wholesale
    pub fn set_date(&mut self, date: NaiveDate) {
        self.draft.date = date;
    }

    /// Validate the draft and produce the action to dispatch
    ///
    /// An edit in progress (the state carries an editing pointer) yields
    /// `UpdateExpense` and leaves the draft as-is; otherwise `AddExpense` is
    /// produced and the draft resets to defaults.
    pub fn submit(&mut self, state: &BudgetState) -> OutlayResult<BudgetAction> {
        if !self.draft.is_complete() {
            self.error = Some(ALL_FIELDS_REQUIRED.to_string());
            return Err(OutlayError::Validation(ALL_FIELDS_REQUIRED.to_string()));
        }

        if let Some(id) = state.editing_id {
            let expense = Expense::from_draft_with_id(self.draft.clone(), id);
            self.error = None;
            return Ok(BudgetAction::UpdateExpense { expense });
        }

        let action = BudgetAction::AddExpense {
            expense: self.draft.clone(),
        };
        self.draft = DraftExpense::new();
        Ok(action)
    }

    /// The current validation error, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The draft under composition
    pub fn draft(&self) -> &DraftExpense {
        &self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::transition;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 2).unwrap()
    }

    fn filled_form() -> ExpenseForm {
        let mut form = ExpenseForm::new();
        form.set_name("Coffee");
        form.set_amount("5");
        form.set_category(CategoryId::new("food"));
        form.set_date(day());
        form
    }

    #[test]
    fn test_empty_field_aborts_submission() {
        let state = BudgetState::default();

        let mut form = filled_form();
        form.set_name("");
        let err = form.submit(&state).unwrap_err();
        assert!(matches!(err, OutlayError::Validation(_)));
        assert_eq!(form.error(), Some(ALL_FIELDS_REQUIRED));
    }

    #[test]
    fn test_zero_amount_is_falsy() {
        let state = BudgetState::default();

        let mut form = filled_form();
        form.set_amount("0");
        assert!(form.submit(&state).is_err());

        let mut form = filled_form();
        form.set_amount("not a number");
        assert!(form.submit(&state).is_err());
    }

    #[test]
    fn test_submit_add_resets_draft() {
        let state = BudgetState::default();
        let mut form = filled_form();

        let action = form.submit(&state).unwrap();
        match action {
            BudgetAction::AddExpense { expense } => {
                assert_eq!(expense.expense_name, "Coffee");
                assert_eq!(expense.amount, 5.0);
            }
            other => panic!("expected AddExpense, got {:?}", other),
        }

        assert!(form.draft().expense_name.is_empty());
        assert_eq!(form.draft().amount, 0.0);
        assert!(form.draft().category.is_empty());
    }

    #[test]
    fn test_submit_update_keeps_draft_and_clears_error() {
        // Build a state with one expense targeted for edit
        let state = BudgetState::default();
        let mut form = filled_form();
        let state = transition(&state, form.submit(&state).unwrap());
        let id = state.expenses[0].id;
        let state = transition(&state, BudgetAction::BeginEdit { id });

        let mut form = ExpenseForm::new();
        // Leave a stale validation error behind to observe it clearing
        form.set_name("");
        let _ = form.submit(&state);
        assert!(form.error().is_some());

        form.sync_editing(&state);
        form.set_name("Coffee Large");
        form.set_amount("7");

        let action = form.submit(&state).unwrap();
        match action {
            BudgetAction::UpdateExpense { expense } => {
                assert_eq!(expense.id, id);
                assert_eq!(expense.expense_name, "Coffee Large");
                assert_eq!(expense.amount, 7.0);
            }
            other => panic!("expected UpdateExpense, got {:?}", other),
        }

        // The draft is not reset after an edit-update
        assert_eq!(form.draft().expense_name, "Coffee Large");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_sync_editing_loads_target_fields() {
        let state = BudgetState::default();
        let mut seed = filled_form();
        let state = transition(&state, seed.submit(&state).unwrap());
        let id = state.expenses[0].id;
        let state = transition(&state, BudgetAction::BeginEdit { id });

        let mut form = ExpenseForm::new();
        form.sync_editing(&state);
        assert_eq!(form.draft().expense_name, "Coffee");
        assert_eq!(form.draft().amount, 5.0);
        assert_eq!(form.draft().category, CategoryId::new("food"));
        assert_eq!(form.draft().date, day());
    }

    #[test]
    fn test_sync_editing_without_pointer_is_noop() {
        let state = BudgetState::default();
        let mut form = filled_form();
        form.sync_editing(&state);
        assert_eq!(form.draft().expense_name, "Coffee");
    }
}
