//! Spending aggregation by category

use std::collections::HashMap;

use crate::models::{ExpenseEntry, Money};

/// Sum expense amounts per category key
///
/// Categories without expenses are absent, not zero. Callers treat a
/// missing key as nothing spent.
pub fn spent_by_category(expenses: &[ExpenseEntry]) -> HashMap<String, Money> {
    let mut spending: HashMap<String, Money> = HashMap::new();
    for expense in expenses {
        *spending.entry(expense.category.clone()).or_default() += expense.amount;
    }
    spending
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, cents: i64) -> ExpenseEntry {
        ExpenseEntry::new(category, Money::from_cents(cents), "")
    }

    #[test]
    fn test_sums_per_category() {
        let expenses = vec![
            expense("food", 1000),
            expense("housing", 50000),
            expense("food", 250),
            expense("pets", 999),
        ];

        let spent = spent_by_category(&expenses);
        assert_eq!(spent.len(), 3);
        assert_eq!(spent["food"].cents(), 1250);
        assert_eq!(spent["housing"].cents(), 50000);
        assert_eq!(spent["pets"].cents(), 999);
    }

    #[test]
    fn test_missing_categories_are_absent() {
        let spent = spent_by_category(&[expense("food", 100)]);
        assert!(!spent.contains_key("transport"));
        assert!(spent_by_category(&[]).is_empty());
    }

    #[test]
    fn test_category_keys_are_case_sensitive() {
        let spent = spent_by_category(&[expense("food", 100), expense("Food", 200)]);
        assert_eq!(spent.len(), 2);
    }
}
