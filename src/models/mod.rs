//! Core data models for outlay
//!
//! This module contains the data structures representing the expense-tracking
//! domain: expenses, drafts, identifiers, and the external category catalog.

pub mod category;
pub mod expense;
pub mod ids;

pub use category::{Category, CategoryCatalog};
pub use expense::{DraftExpense, Expense};
pub use ids::{CategoryId, ExpenseId};
