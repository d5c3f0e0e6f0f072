//! Storage layer for the budget tracker
//!
//! The whole budget lives in one JSON document that is read at startup and
//! rewritten in full after every change.

pub mod file_io;
pub mod store;

pub use file_io::{read_json, write_json};
pub use store::BudgetStore;
