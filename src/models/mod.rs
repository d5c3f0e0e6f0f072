//! Core data models for the budget tracker
//!
//! This module contains the data structures of both domains: the persisted
//! budget document (entries, allocation map) and the orders fed to the order
//! analysis.

pub mod allocation;
pub mod document;
pub mod entry;
pub mod money;
pub mod order;

pub use allocation::{AllocationMap, BudgetCategory};
pub use document::BudgetDocument;
pub use entry::{ExpenseEntry, IncomeEntry};
pub use money::{Money, MoneyParseError};
pub use order::{Order, OrderCategory, OrderStatus, OrderSummary};
