//! Business logic layer for the budget tracker
//!
//! The ledger service is the only component with side effects; allocation,
//! spending aggregation, evaluation and advice are pure functions over a
//! document snapshot.

pub mod advice;
pub mod allocation;
pub mod evaluation;
pub mod ledger;
pub mod spending;

pub use advice::suggestions;
pub use allocation::allocate;
pub use evaluation::{
    evaluate, warnings, warnings_with_threshold, BudgetState, BudgetWarning, CategoryState,
    WarningKind,
};
pub use ledger::LedgerService;
pub use spending::spent_by_category;
