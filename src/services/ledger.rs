//! Ledger service
//!
//! Appends incomes and expenses to the store's document and persists the
//! whole document after every append.

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseEntry, IncomeEntry, Money, MoneyParseError};
use crate::storage::BudgetStore;

/// Service for recording incomes and expenses
pub struct LedgerService<'a> {
    store: &'a mut BudgetStore,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(store: &'a mut BudgetStore) -> Self {
        Self { store }
    }

    /// Record an income from user input, coercing the amount
    ///
    /// Nothing is appended or saved if the amount is not a number.
    pub fn add_income(&mut self, amount: &str, note: &str) -> TrackerResult<IncomeEntry> {
        let amount = parse_amount(amount)?;
        self.record_income(amount, note)
    }

    /// Record an expense from user input, coercing the amount
    ///
    /// The category is stored verbatim, known or not.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount: &str,
        note: &str,
    ) -> TrackerResult<ExpenseEntry> {
        let amount = parse_amount(amount)?;
        self.record_expense(category, amount, note)
    }

    /// Record an income with an already-typed amount
    pub fn record_income(&mut self, amount: Money, note: &str) -> TrackerResult<IncomeEntry> {
        let entry = IncomeEntry::new(amount, note);
        self.store.document_mut().incomes.push(entry.clone());
        self.store.save()?;

        info!(amount = %entry.amount, note = %entry.note, "recorded income");
        Ok(entry)
    }

    /// Record an expense with an already-typed amount
    pub fn record_expense(
        &mut self,
        category: &str,
        amount: Money,
        note: &str,
    ) -> TrackerResult<ExpenseEntry> {
        let entry = ExpenseEntry::new(category, amount, note);
        self.store.document_mut().expenses.push(entry.clone());
        self.store.save()?;

        info!(
            category = %entry.category,
            amount = %entry.amount,
            note = %entry.note,
            "recorded expense"
        );
        Ok(entry)
    }
}

fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input).map_err(|e| match e {
        MoneyParseError::InvalidFormat(_) => TrackerError::invalid_amount(input),
        MoneyParseError::OutOfRange(_) => TrackerError::amount_out_of_range(input),
    })
}
