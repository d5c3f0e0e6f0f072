//! budget-tracker - personal budget tracking from the terminal
//!
//! The tracker keeps every income and expense in one JSON document, splits
//! total income into per-category limits using fixed percentages, and flags
//! categories that are close to or over their limit. A separate helper sums
//! order amounts by status and category.
//!
//! # Architecture
//!
//! - `config`: data paths and user settings
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: money, ledger entries, allocation map, budget document, orders
//! - `storage`: JSON document store
//! - `services`: ledger, allocation, spending, evaluation and advice
//! - `reports`: budget report and order analysis
//! - `display`: terminal formatting helpers
//! - `cli`: command handlers and the interactive loop
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_tracker::config::{Settings, TrackerPaths};
//! use budget_tracker::reports::BudgetReport;
//! use budget_tracker::services::LedgerService;
//! use budget_tracker::storage::BudgetStore;
//!
//! # fn main() -> budget_tracker::TrackerResult<()> {
//! let paths = TrackerPaths::new();
//! let mut store = BudgetStore::open_at(&paths)?;
//! LedgerService::new(&mut store).add_income("2000", "salary")?;
//! LedgerService::new(&mut store).add_expense("food", "200", "groceries")?;
//!
//! let report = BudgetReport::generate(store.document(), &Settings::default());
//! print!("{}", report.format_terminal(""));
//! store.close()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
