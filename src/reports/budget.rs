//! Budget Report
//!
//! Bundles the budget state with its warnings and advice, and renders it for
//! the terminal or as JSON.

use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::report::{format_header, separator};
use crate::models::{BudgetDocument, Money};
use crate::services::{evaluate, suggestions, warnings_with_threshold, BudgetState, BudgetWarning};

const REPORT_WIDTH: usize = 56;

/// Tips for a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAdvice {
    pub category: String,
    pub tips: Vec<String>,
}

/// Full budget report for one document snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReport {
    #[serde(flatten)]
    pub state: BudgetState,
    pub warnings: Vec<BudgetWarning>,
    pub advice: Vec<CategoryAdvice>,
    /// Every recorded expense, budgeted or not
    pub total_expenses: Money,
    /// Expenses filed under categories that have no allocation
    pub unbudgeted_spending: Money,
}

impl BudgetReport {
    /// Generate a report for a document using the configured threshold
    pub fn generate(doc: &BudgetDocument, settings: &Settings) -> Self {
        let state = evaluate(doc);
        let warnings = warnings_with_threshold(&state, settings.warning_threshold);
        let advice = state
            .categories
            .iter()
            .map(|c| CategoryAdvice {
                category: c.category.clone(),
                tips: suggestions(&c.category, &state),
            })
            .collect();

        let unbudgeted_spending = doc
            .expenses
            .iter()
            .filter(|e| doc.allocation.get(&e.category).is_none())
            .map(|e| e.amount)
            .sum();

        Self {
            state,
            warnings,
            advice,
            total_expenses: doc.total_expenses(),
            unbudgeted_spending,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format_header("Budget", REPORT_WIDTH));
        output.push('\n');
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Total income: {}\n",
            money(self.state.total_income)
        ));
        output.push_str(&format!(
            "Total expenses: {}\n\n",
            money(self.total_expenses)
        ));

        output.push_str(&format!(
            "{:<14} {:>13} {:>13} {:>13}\n",
            "Category", "Limit", "Spent", "Left"
        ));
        for cat in &self.state.categories {
            let left = if cat.is_overspent() {
                format!("{} *", money(cat.left))
            } else {
                money(cat.left)
            };
            output.push_str(&format!(
                "{:<14} {:>13} {:>13} {:>13}\n",
                cat.category,
                money(cat.limit),
                money(cat.spent),
                left
            ));
        }

        if !self.unbudgeted_spending.is_zero() {
            output.push_str(&format!(
                "\nUnbudgeted spending: {}\n",
                money(self.unbudgeted_spending)
            ));
        }

        output.push('\n');
        if self.warnings.is_empty() {
            output.push_str("No warnings.\n");
        } else {
            output.push_str("Warnings:\n");
            for warning in &self.warnings {
                output.push_str(&format!("  ! {}\n", warning));
            }
        }

        let with_tips: Vec<_> = self.advice.iter().filter(|a| !a.tips.is_empty()).collect();
        if !with_tips.is_empty() {
            output.push_str("\nSuggestions:\n");
            for advice in with_tips {
                output.push_str(&format!("  {}:\n", advice.category));
                for tip in &advice.tips {
                    output.push_str(&format!("    - {}\n", tip));
                }
            }
        }

        output
    }

    /// Render the report as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
