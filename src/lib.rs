//! outlay - Personal budget and expense tracker for the command line
//!
//! This library provides the core functionality for the outlay expense
//! tracker. A pure, action-driven state machine governs every mutation of
//! the budget state; the CLI is a thin hosting layer that hydrates the
//! state from disk, dispatches actions, and persists after each transition.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, drafts, the category catalog)
//! - `state`: The state machine (actions, transition function, store)
//! - `form`: The expense form (input collection and validation)
//! - `storage`: Key-value persistence and state hydration
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use outlay::state::{BudgetAction, BudgetStore};
//!
//! let mut store = BudgetStore::default();
//! store.dispatch(BudgetAction::SetBudget { budget: 500.0 });
//! assert_eq!(store.state().budget, 500.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod models;
pub mod state;
pub mod storage;

pub use error::{OutlayError, OutlayResult};
