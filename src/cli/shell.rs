//! Interactive command loop
//!
//! Reads one whitespace-separated command per line and runs it to
//! completion, including the save, before reading the next. The loop ends on
//! `exit` or end of input.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::settings::Settings;
use crate::display::truncate;
use crate::error::{TrackerError, TrackerResult};
use crate::reports::BudgetReport;
use crate::services::LedgerService;
use crate::storage::BudgetStore;

const PROMPT: &str = "> ";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    AddIncome { amount: String, note: String },
    AddExpense { category: String, amount: String, note: String },
    Report,
    Help,
    Exit,
    /// Blank line
    Empty,
    /// Known command with missing arguments; carries the usage line
    Malformed(&'static str),
    Unknown(String),
}

impl ShellCommand {
    /// Parse one input line
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Self::Empty;
        };

        match command {
            "add_income" => match tokens.next() {
                Some(amount) => Self::AddIncome {
                    amount: amount.to_string(),
                    note: tokens.collect::<Vec<_>>().join(" "),
                },
                None => Self::Malformed(ADD_INCOME_USAGE),
            },
            "add_expense" => match (tokens.next(), tokens.next()) {
                (Some(category), Some(amount)) => Self::AddExpense {
                    category: category.to_string(),
                    amount: amount.to_string(),
                    note: tokens.collect::<Vec<_>>().join(" "),
                },
                _ => Self::Malformed(ADD_EXPENSE_USAGE),
            },
            "report" => Self::Report,
            "help" => Self::Help,
            "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

const ADD_INCOME_USAGE: &str = "add_income <amount> [note...]";
const ADD_EXPENSE_USAGE: &str = "add_expense <category> <amount> [note...]";

const HELP_TEXT: &str = "\
Commands:
  add_income <amount> [note...]
  add_expense <category> <amount> [note...]
  report
  help
  exit";

/// Interactive session over a store
pub struct Shell<'a> {
    store: &'a mut BudgetStore,
    settings: &'a Settings,
}

impl<'a> Shell<'a> {
    /// Create a new shell session
    pub fn new(store: &'a mut BudgetStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Run until `exit` or end of input
    ///
    /// Bad input is reported and the loop continues. Storage and I/O
    /// failures stop the loop and are returned.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> TrackerResult<()> {
        self.print_report(output)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                debug!("end of input, leaving shell");
                writeln!(output)?;
                break;
            };
            let line = line?;

            match ShellCommand::parse(&line) {
                ShellCommand::Exit => break,
                command => self.execute(command, output)?,
            }
        }

        Ok(())
    }

    /// Run a single non-exit command
    pub fn execute<W: Write>(&mut self, command: ShellCommand, output: &mut W) -> TrackerResult<()> {
        let result = match command {
            ShellCommand::AddIncome { amount, note } => LedgerService::new(self.store)
                .add_income(&amount, &note)
                .map(|entry| format!("Income recorded: {} {}", entry.amount, truncate(&entry.note, 40))),
            ShellCommand::AddExpense {
                category,
                amount,
                note,
            } => LedgerService::new(self.store)
                .add_expense(&category, &amount, &note)
                .map(|entry| {
                    format!(
                        "Expense recorded: {} {} {}",
                        entry.category,
                        entry.amount,
                        truncate(&entry.note, 40)
                    )
                }),
            ShellCommand::Report => return self.print_report(output),
            ShellCommand::Help => {
                writeln!(output, "{}", HELP_TEXT)?;
                return Ok(());
            }
            ShellCommand::Empty | ShellCommand::Exit => return Ok(()),
            ShellCommand::Malformed(usage) => {
                writeln!(output, "Usage: {}", usage)?;
                return Ok(());
            }
            ShellCommand::Unknown(name) => {
                writeln!(output, "Unknown command '{}'. Type 'help' for commands.", name)?;
                return Ok(());
            }
        };

        match result {
            Ok(confirmation) => {
                writeln!(output, "{}", confirmation.trim_end())?;
                self.print_report(output)
            }
            Err(err @ TrackerError::Validation(_)) => {
                warn!(error = %err, "rejected command");
                writeln!(output, "Error: {}", err)?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn print_report<W: Write>(&self, output: &mut W) -> TrackerResult<()> {
        let report = BudgetReport::generate(self.store.document(), self.settings);
        write!(output, "{}", report.format_terminal(&self.settings.currency_symbol))?;
        Ok(())
    }
}
