//! One-shot command handlers
//!
//! Each handler works on an already opened store and prints to stdout.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};
use crate::reports::{analyze_orders, read_orders, sample_orders, BudgetReport};
use crate::services::LedgerService;
use crate::storage::BudgetStore;

use super::demo::seed_demo_data;

/// Record an income and print the updated report
pub fn handle_add_income(
    store: &mut BudgetStore,
    settings: &Settings,
    amount: &str,
    note: &[String],
) -> TrackerResult<()> {
    let entry = LedgerService::new(store).add_income(amount, &note.join(" "))?;
    println!("Income recorded: {}", entry.amount);
    print_report(store, settings, false)
}

/// Record an expense and print the updated report
pub fn handle_add_expense(
    store: &mut BudgetStore,
    settings: &Settings,
    category: &str,
    amount: &str,
    note: &[String],
) -> TrackerResult<()> {
    let entry = LedgerService::new(store).add_expense(category, amount, &note.join(" "))?;
    println!("Expense recorded: {} {}", entry.category, entry.amount);
    print_report(store, settings, false)
}

/// Print the budget report as text or JSON
pub fn print_report(store: &BudgetStore, settings: &Settings, json: bool) -> TrackerResult<()> {
    let report = BudgetReport::generate(store.document(), settings);
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }
    Ok(())
}

/// Seed demo data and print the report
pub fn handle_demo(store: &mut BudgetStore, settings: &Settings) -> TrackerResult<()> {
    seed_demo_data(store)?;
    println!("Demo data added to {}", store.path().display());
    println!();
    print_report(store, settings, false)
}

/// Analyze orders from a file, stdin or the built-in sample and print JSON
pub fn handle_orders(file: Option<PathBuf>, sample: bool) -> TrackerResult<()> {
    let orders = if sample {
        sample_orders()
    } else if let Some(path) = file {
        read_orders(BufReader::new(File::open(path)?))?
    } else {
        read_orders(io::stdin().lock())?
    };

    let summary = analyze_orders(&orders);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Apply any setting changes, persist them, then print paths and settings
pub fn handle_config(
    paths: &TrackerPaths,
    settings: &mut Settings,
    threshold: Option<f64>,
    currency: Option<String>,
) -> TrackerResult<()> {
    if threshold.is_some() || currency.is_some() {
        if let Some(threshold) = threshold {
            if !(threshold > 0.0 && threshold <= 1.0) {
                return Err(TrackerError::Validation(format!(
                    "Warning threshold must be in (0, 1], got {}",
                    threshold
                )));
            }
            settings.warning_threshold = threshold;
        }
        if let Some(currency) = currency {
            settings.currency_symbol = currency;
        }
        settings.save(paths)?;
        println!("Settings saved to {}", paths.settings_file().display());
        println!();
    }

    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Data file:      {}", paths.data_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Warning threshold: {}", settings.warning_threshold);
    println!("  Currency symbol:   {:?}", settings.currency_symbol);
    println!("  Log filter:        {}", settings.log_filter);
    Ok(())
}
