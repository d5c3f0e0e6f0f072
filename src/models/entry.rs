//! Ledger entry models
//!
//! Incomes and expenses are append-only records. Once created they are never
//! edited or deleted in-process.

use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Current local time as an ISO-8601 string with second precision
fn now_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// A recorded income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub amount: Money,
    #[serde(default)]
    pub note: String,
    pub timestamp: String,
}

impl IncomeEntry {
    /// Create a new income stamped with the current time
    pub fn new(amount: Money, note: impl Into<String>) -> Self {
        Self {
            amount,
            note: note.into(),
            timestamp: now_timestamp(),
        }
    }
}

/// A recorded expense
///
/// `category` is free-form text. Keys outside the allocation map are legal
/// and are simply not budgeted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub category: String,
    pub amount: Money,
    #[serde(default)]
    pub note: String,
    pub timestamp: String,
}

impl ExpenseEntry {
    /// Create a new expense stamped with the current time
    pub fn new(category: impl Into<String>, amount: Money, note: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount,
            note: note.into(),
            timestamp: now_timestamp(),
        }
    }
}
