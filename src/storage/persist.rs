//! Hydration and persistence of the budget state
//!
//! The persisted layout is two string-valued keys: `budget` holds the
//! decimal budget, `expenses` holds a JSON array of expense objects. The
//! transition function never touches storage; the hosting layer hydrates
//! once at startup and notifies a [`StateObserver`] after every dispatch.

use tracing::{debug, info};

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;
use crate::state::BudgetState;

use super::kv::KeyValueStore;

const BUDGET_KEY: &str = "budget";
const EXPENSES_KEY: &str = "expenses";

/// Build the initial state from persisted storage
///
/// Absent or blank keys read as defaults (zero budget, empty list);
/// malformed non-empty values are an error the host surfaces.
pub fn hydrate_state<S: KeyValueStore>(reader: &S) -> OutlayResult<BudgetState> {
    let budget = match read_present(reader, BUDGET_KEY)? {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|e| OutlayError::Storage(format!("Malformed budget value: {}", e)))?,
        None => 0.0,
    };

    let expenses: Vec<Expense> = match read_present(reader, EXPENSES_KEY)? {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| OutlayError::Storage(format!("Malformed expenses value: {}", e)))?,
        None => Vec::new(),
    };

    info!(budget, expenses = expenses.len(), "hydrated state");
    Ok(BudgetState {
        budget,
        expenses,
        ..BudgetState::default()
    })
}

/// Write the durable parts of the state back to storage
pub fn persist_state<S: KeyValueStore>(writer: &mut S, state: &BudgetState) -> OutlayResult<()> {
    writer.set(BUDGET_KEY, &format!("{}", state.budget))?;
    let expenses = serde_json::to_string(&state.expenses)?;
    writer.set(EXPENSES_KEY, &expenses)?;
    debug!(expenses = state.expenses.len(), "persisted state");
    Ok(())
}

// Blank stored values count as absent
fn read_present<S: KeyValueStore>(reader: &S, key: &str) -> OutlayResult<Option<String>> {
    Ok(reader.get(key)?.filter(|v| !v.trim().is_empty()))
}

/// Notified after every dispatch with the new state
pub trait StateObserver {
    fn state_changed(&mut self, state: &BudgetState) -> OutlayResult<()>;
}

/// A state observer that writes through to a key-value store
#[derive(Debug)]
pub struct StatePersister<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StatePersister<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Hydrate the initial state from the wrapped store
    pub fn hydrate(&self) -> OutlayResult<BudgetState> {
        hydrate_state(&self.store)
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> StateObserver for StatePersister<S> {
    fn state_changed(&mut self, state: &BudgetState) -> OutlayResult<()> {
        persist_state(&mut self.store, state)
    }
}
