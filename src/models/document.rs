//! The persisted budget document
//!
//! One JSON document holds the whole state: every income, every expense and
//! the allocation percentages. It is read once, mutated in memory and
//! rewritten in full after each change.

use serde::{Deserialize, Serialize};

use super::allocation::AllocationMap;
use super::entry::{ExpenseEntry, IncomeEntry};
use super::money::Money;

/// Everything the budget tracker persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDocument {
    #[serde(default)]
    pub incomes: Vec<IncomeEntry>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default = "AllocationMap::default_split")]
    pub allocation: AllocationMap,
}

impl Default for BudgetDocument {
    fn default() -> Self {
        Self {
            incomes: Vec::new(),
            expenses: Vec::new(),
            allocation: AllocationMap::default_split(),
        }
    }
}

impl BudgetDocument {
    /// Create an empty document with a specific allocation
    pub fn with_allocation(allocation: AllocationMap) -> Self {
        Self {
            allocation,
            ..Self::default()
        }
    }

    /// Sum of all recorded incomes
    pub fn total_income(&self) -> Money {
        self.incomes.iter().map(|i| i.amount).sum()
    }

    /// Sum of all recorded expenses, budgeted or not
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document() {
        let doc = BudgetDocument::default();
        assert!(doc.incomes.is_empty());
        assert!(doc.expenses.is_empty());
        assert_eq!(doc.allocation, AllocationMap::default_split());
        assert!(doc.total_income().is_zero());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let doc: BudgetDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, BudgetDocument::default());
    }

    #[test]
    fn test_totals() {
        let mut doc = BudgetDocument::default();
        doc.incomes.push(IncomeEntry::new(Money::from_units(1500), ""));
        doc.incomes.push(IncomeEntry::new(Money::from_units(500), "bonus"));
        doc.expenses.push(ExpenseEntry::new("food", Money::from_cents(1999), ""));
        doc.expenses.push(ExpenseEntry::new("toys", Money::from_units(10), ""));

        assert_eq!(doc.total_income(), Money::from_units(2000));
        assert_eq!(doc.total_expenses(), Money::from_cents(2999));
    }

    #[test]
    fn test_field_order_on_disk() {
        let json = serde_json::to_string(&BudgetDocument::default()).unwrap();
        let incomes = json.find("\"incomes\"").unwrap();
        let expenses = json.find("\"expenses\"").unwrap();
        let allocation = json.find("\"allocation\"").unwrap();
        assert!(incomes < expenses && expenses < allocation);
    }
}
