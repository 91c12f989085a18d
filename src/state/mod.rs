//! The budget state machine
//!
//! State lives in [`BudgetState`]; every mutation is a [`BudgetAction`]
//! applied by the pure [`transition`] function. [`BudgetStore`] owns the
//! current state and dispatches actions synchronously.

pub mod action;
pub mod budget;
pub mod reducer;
pub mod store;

pub use action::BudgetAction;
pub use budget::BudgetState;
pub use reducer::transition;
pub use store::BudgetStore;
