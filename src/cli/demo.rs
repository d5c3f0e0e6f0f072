//! Demo data bootstrapping
//!
//! Seeds a store with a month of plausible activity so the report has
//! something to show.

use tracing::info;

use crate::error::TrackerResult;
use crate::models::Money;
use crate::services::LedgerService;
use crate::storage::BudgetStore;

const DEMO_INCOMES: &[(i64, &str)] = &[(180_000, "salary"), (25_000, "freelance")];

const DEMO_EXPENSES: &[(&str, i64, &str)] = &[
    ("housing", 60_000, "rent"),
    ("food", 18_550, "groceries"),
    ("food", 4_200, "dinner out"),
    ("transport", 6_000, "monthly pass"),
    ("utilities", 21_300, "electricity and internet"),
    ("misc", 3_999, "books"),
];

/// Append the demo incomes and expenses, saving after each one
pub fn seed_demo_data(store: &mut BudgetStore) -> TrackerResult<()> {
    let mut ledger = LedgerService::new(store);

    for (cents, note) in DEMO_INCOMES {
        ledger.record_income(Money::from_cents(*cents), note)?;
    }
    for (category, cents, note) in DEMO_EXPENSES {
        ledger.record_expense(category, Money::from_cents(*cents), note)?;
    }

    info!(
        incomes = DEMO_INCOMES.len(),
        expenses = DEMO_EXPENSES.len(),
        "seeded demo data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{evaluate, warnings, WarningKind};
    use tempfile::TempDir;

    #[test]
    fn test_seed_demo_data() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = BudgetStore::open(temp_dir.path().join("budget_data.json")).unwrap();

        seed_demo_data(&mut store).unwrap();

        let doc = BudgetStore::load(store.path()).unwrap();
        assert_eq!(doc.incomes.len(), 2);
        assert_eq!(doc.expenses.len(), 6);
        assert_eq!(doc.total_income(), Money::from_units(2050));

        // utilities: 213.00 of 205.00
        let warnings = warnings(&evaluate(&doc));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, "utilities");
        assert_eq!(warnings[0].kind, WarningKind::LimitExhausted);
    }
}
