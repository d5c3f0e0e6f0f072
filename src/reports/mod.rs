//! Reports
//!
//! - `budget`: budget state with warnings and advice
//! - `orders`: order totals by status and category

pub mod budget;
pub mod orders;

pub use budget::{BudgetReport, CategoryAdvice};
pub use orders::{analyze_orders, read_orders, sample_orders};
