//! Expense display formatting
//!
//! Formats the expense list and budget summary for terminal output.

use crate::config::Settings;
use crate::models::{CategoryCatalog, Expense};
use crate::state::BudgetState;

/// Format a single expense as a table row
pub fn format_expense_row(
    expense: &Expense,
    catalog: &CategoryCatalog,
    settings: &Settings,
) -> String {
    format!(
        "{:12} {:10} {:20} {:15} {:>12}",
        expense.id.to_string(),
        expense.date.format(&settings.date_format),
        truncate(&expense.expense_name, 20),
        catalog.display_name(&expense.category),
        format!("{}{:.2}", settings.currency_symbol, expense.amount),
    )
}

/// Format a list of expenses as a table
pub fn format_expense_list(
    expenses: &[&Expense],
    catalog: &CategoryCatalog,
    settings: &Settings,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:20} {:15} {:>12}\n",
        "ID", "Date", "Name", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(73));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, catalog, settings));
        output.push('\n');
    }

    output
}

/// Format the budget / spent / remaining summary
pub fn format_budget_summary(state: &BudgetState, settings: &Settings) -> String {
    let sym = &settings.currency_symbol;
    format!(
        "Budget:    {}{:.2}\nSpent:     {}{:.2} ({:.1}%)\nRemaining: {}{:.2}\n",
        sym,
        state.budget,
        sym,
        state.total_spent(),
        state.spent_percentage(),
        sym,
        state.remaining(),
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
