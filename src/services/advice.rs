//! Canned spending advice
//!
//! Tips are picked from a fixed table keyed by category. Which branch is
//! used depends only on the category state: nothing spent, overspent, or
//! on track.

use crate::models::BudgetCategory;

use super::evaluation::BudgetState;

/// Tips for a category that went over its limit
fn overspent_tips(category: Option<BudgetCategory>) -> &'static [&'static str] {
    match category {
        Some(BudgetCategory::Housing) => &[
            "Housing is over budget: review rent or mortgage terms.",
            "Look for cheaper insurance or shared housing costs.",
            "Postpone non-urgent repairs until next month.",
        ],
        Some(BudgetCategory::Food) => &[
            "Food is over budget: plan meals for the week ahead.",
            "Cook at home instead of ordering in.",
            "Shop with a list and avoid impulse buys.",
            "Buy staples in bulk.",
        ],
        Some(BudgetCategory::Transport) => &[
            "Transport is over budget: try public transport or cycling.",
            "Combine errands into fewer trips.",
        ],
        Some(BudgetCategory::Utilities) => &[
            "Utilities are over budget: check for unused subscriptions.",
            "Reduce heating, cooling and standby power.",
            "Compare tariffs from other providers.",
        ],
        Some(BudgetCategory::Savings) => &[
            "More went to savings than planned: make sure bills are still covered.",
        ],
        Some(BudgetCategory::Misc) => &[
            "Miscellaneous spending is over budget: track small purchases.",
            "Wait a day before buying anything unplanned.",
        ],
        None => &["This category is over budget: cut back until the next income."],
    }
}

/// Tips for a category with money left
fn on_track_tips(category: Option<BudgetCategory>) -> &'static [&'static str] {
    match category {
        Some(BudgetCategory::Housing) => &["Housing is on track."],
        Some(BudgetCategory::Food) => &[
            "Food spending is on track.",
            "Leftover food budget can go to savings.",
        ],
        Some(BudgetCategory::Transport) => &["Transport spending is on track."],
        Some(BudgetCategory::Utilities) => &["Utilities are on track."],
        Some(BudgetCategory::Savings) => &[
            "Savings are on track.",
            "Consider automating a transfer on payday.",
        ],
        Some(BudgetCategory::Misc) => &["Miscellaneous spending is on track."],
        None => &[],
    }
}

/// Advice for one category of a budget state
///
/// Returns nothing for categories absent from the state, a single tip when
/// nothing was spent yet, and otherwise the overspent or on-track tips.
pub fn suggestions(category: &str, state: &BudgetState) -> Vec<String> {
    let Some(cat) = state.get(category) else {
        return Vec::new();
    };

    if cat.spent.is_zero() {
        return vec![format!(
            "No spending in '{}' yet: nothing to adjust.",
            category
        )];
    }

    let known = BudgetCategory::from_key(category);
    let tips = if cat.is_overspent() {
        overspent_tips(known)
    } else {
        on_track_tips(known)
    };

    tips.iter().map(|tip| tip.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllocationMap, BudgetDocument, ExpenseEntry, IncomeEntry, Money};
    use crate::services::evaluation::evaluate;

    fn state_with(expenses: &[(&str, i64)]) -> BudgetState {
        let mut doc = BudgetDocument::default();
        doc.incomes.push(IncomeEntry::new(Money::from_units(2000), ""));
        for (category, amount) in expenses {
            doc.expenses
                .push(ExpenseEntry::new(*category, Money::from_units(*amount), ""));
        }
        evaluate(&doc)
    }

    #[test]
    fn test_no_spending_gives_single_tip() {
        let state = state_with(&[]);
        for category in BudgetCategory::all() {
            let tips = suggestions(category.key(), &state);
            assert_eq!(tips.len(), 1);
            assert!(tips[0].contains("No spending"));
        }
    }

    #[test]
    fn test_overspent_branch() {
        let state = state_with(&[("food", 600)]);
        let tips = suggestions("food", &state);

        assert_eq!(tips.len(), 4);
        assert!(tips[0].contains("over budget"));
    }

    #[test]
    fn test_on_track_branch() {
        let state = state_with(&[("food", 100)]);
        let tips = suggestions("food", &state);

        assert_eq!(tips.len(), 2);
        assert!(tips.iter().all(|t| !t.contains("over budget")));
    }

    #[test]
    fn test_tip_count_bounds() {
        let overspent = state_with(&[
            ("housing", 5000),
            ("food", 5000),
            ("transport", 5000),
            ("utilities", 5000),
            ("savings", 5000),
            ("misc", 5000),
        ]);
        for category in BudgetCategory::all() {
            let tips = suggestions(category.key(), &overspent);
            assert!(!tips.is_empty() && tips.len() <= 4);
        }
    }

    #[test]
    fn test_unallocated_category_has_no_tips() {
        let state = state_with(&[("hobbies", 10)]);
        assert!(suggestions("hobbies", &state).is_empty());
    }

    #[test]
    fn test_custom_allocated_category_uses_generic_tips() {
        let mut doc = BudgetDocument::with_allocation(
            [("pets", 0.5), ("food", 0.5)].into_iter().collect::<AllocationMap>(),
        );
        doc.incomes.push(IncomeEntry::new(Money::from_units(100), ""));
        doc.expenses
            .push(ExpenseEntry::new("pets", Money::from_units(80), ""));
        let state = evaluate(&doc);

        let tips = suggestions("pets", &state);
        assert_eq!(tips.len(), 1);
        assert!(tips[0].contains("over budget"));
    }

    #[test]
    fn test_suggestions_are_deterministic() {
        let state = state_with(&[("transport", 300)]);
        assert_eq!(
            suggestions("transport", &state),
            suggestions("transport", &state)
        );
    }
}
