//! CLI command handlers
//!
//! This module bridges the clap front end and the interactive loop with the
//! service layer.

pub mod commands;
pub mod demo;
pub mod shell;

pub use commands::{
    handle_add_expense, handle_add_income, handle_config, handle_demo, handle_orders,
    print_report,
};
pub use demo::seed_demo_data;
pub use shell::{Shell, ShellCommand};
