//! Expense and DraftExpense models
//!
//! A draft carries the field values of an expense being composed or edited;
//! it becomes a persisted `Expense` only when an id is assigned on submit.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ExpenseId};

/// A persisted expense entry
///
/// Serialized field names follow the persisted-state layout (`expenseName`
/// rather than `expense_name`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation, immutable thereafter
    pub id: ExpenseId,

    /// Display name
    #[serde(rename = "expenseName")]
    pub expense_name: String,

    /// Amount spent; expected non-negative but not enforced here
    pub amount: f64,

    /// Reference into the external category catalog (never validated here)
    pub category: CategoryId,

    /// Calendar date of the expense (ISO `YYYY-MM-DD` when serialized)
    pub date: NaiveDate,
}

impl Expense {
    /// Construct a persisted expense from a draft by assigning a fresh id
    ///
    /// Performs no content validation; that is the form's responsibility.
    pub fn from_draft(draft: DraftExpense) -> Self {
        Self::from_draft_with_id(draft, ExpenseId::new())
    }

    /// Construct an expense from a draft with a known id (the update path)
    pub fn from_draft_with_id(draft: DraftExpense, id: ExpenseId) -> Self {
        Self {
            id,
            expense_name: draft.expense_name,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
        }
    }
}

/// An expense's field values prior to being assigned a persistent id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftExpense {
    #[serde(rename = "expenseName")]
    pub expense_name: String,
    pub amount: f64,
    pub category: CategoryId,
    pub date: NaiveDate,
}

impl DraftExpense {
    /// An empty draft: blank name, zero amount, no category, today's date
    pub fn new() -> Self {
        Self {
            expense_name: String::new(),
            amount: 0.0,
            category: CategoryId::default(),
            date: Local::now().date_naive(),
        }
    }

    /// Capture the field values of an existing expense (the edit path)
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            expense_name: expense.expense_name.clone(),
            amount: expense.amount,
            category: expense.category.clone(),
            date: expense.date,
        }
    }

    /// True when every field carries a submittable value
    ///
    /// Mirrors the form's falsy check: empty name, zero amount, or an
    /// unset category all make the draft incomplete.
    pub fn is_complete(&self) -> bool {
        !self.expense_name.is_empty() && self.amount != 0.0 && !self.category.is_empty()
    }
}

impl Default for DraftExpense {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> DraftExpense {
        DraftExpense {
            expense_name: "Coffee".to_string(),
            amount: 5.0,
            category: CategoryId::new("food"),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        }
    }

    #[test]
    fn test_from_draft_assigns_fresh_id() {
        let a = Expense::from_draft(sample_draft());
        let b = Expense::from_draft(sample_draft());
        assert_ne!(a.id, b.id);
        assert_eq!(a.expense_name, "Coffee");
        assert_eq!(a.amount, 5.0);
    }

    #[test]
    fn test_from_draft_does_not_validate() {
        let empty = DraftExpense::new();
        assert!(!empty.is_complete());
        // Construction still succeeds; validation lives in the form
        let expense = Expense::from_draft(empty);
        assert!(expense.expense_name.is_empty());
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = DraftExpense::new();
        assert!(draft.expense_name.is_empty());
        assert_eq!(draft.amount, 0.0);
        assert!(draft.category.is_empty());
        assert_eq!(draft.date, Local::now().date_naive());
    }

    #[test]
    fn test_expense_serde_layout() {
        let expense = Expense::from_draft(sample_draft());
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"expenseName\":\"Coffee\""));
        assert!(json.contains("\"date\":\"2026-03-14\""));
        assert!(json.contains("\"category\":\"food\""));

        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_draft_round_trip_through_expense() {
        let draft = sample_draft();
        let expense = Expense::from_draft(draft.clone());
        assert_eq!(DraftExpense::from_expense(&expense), draft);
    }
}
