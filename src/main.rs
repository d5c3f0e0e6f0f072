use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_add_expense, handle_add_income, handle_config, handle_demo, handle_orders,
    print_report, Shell,
};
use budget_tracker::config::{Settings, TrackerPaths};
use budget_tracker::logging::init_tracing;
use budget_tracker::storage::BudgetStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker with percentage allocations",
    long_about = "Tracks incomes and expenses in a JSON file, splits total income \
                  into per-category limits and warns when a category is close to \
                  or over its limit. Run without a command to start the \
                  interactive shell."
)]
struct Cli {
    /// Directory holding budget_data.json and budget_config.json
    /// [default: $BUDGET_TRACKER_DIR, else the current directory]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// Record an income
    AddIncome {
        /// Amount (e.g., "2000" or "2000.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Free-form note
        note: Vec<String>,
    },

    /// Record an expense
    AddExpense {
        /// Category key (housing, food, transport, utilities, savings, misc)
        category: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Free-form note
        note: Vec<String>,
    },

    /// Show limits, spending, warnings and suggestions
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add sample incomes and expenses
    Demo,

    /// Sum orders by status and category
    Orders {
        /// JSON file with an array of orders (reads stdin if omitted)
        file: Option<PathBuf>,
        /// Use the built-in sample orders
        #[arg(long, conflicts_with = "file")]
        sample: bool,
    },

    /// Show current configuration and paths, optionally updating settings
    Config {
        /// Spent/limit ratio that triggers a high-usage warning (0 < x <= 1)
        #[arg(long)]
        threshold: Option<f64>,
        /// Currency symbol shown in reports
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::resolve(cli.data_dir);
    let mut settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut store = BudgetStore::open_at(&paths)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            Shell::new(&mut store, &settings).run(stdin.lock(), &mut stdout)?;
            store.close()?;
        }
        Commands::AddIncome { amount, note } => {
            let mut store = BudgetStore::open_at(&paths)?;
            handle_add_income(&mut store, &settings, &amount, &note)?;
            store.close()?;
        }
        Commands::AddExpense {
            category,
            amount,
            note,
        } => {
            let mut store = BudgetStore::open_at(&paths)?;
            handle_add_expense(&mut store, &settings, &category, &amount, &note)?;
            store.close()?;
        }
        Commands::Report { json } => {
            let store = BudgetStore::open_at(&paths)?;
            print_report(&store, &settings, json)?;
        }
        Commands::Demo => {
            let mut store = BudgetStore::open_at(&paths)?;
            handle_demo(&mut store, &settings)?;
            store.close()?;
        }
        Commands::Orders { file, sample } => handle_orders(file, sample)?,
        Commands::Config {
            threshold,
            currency,
        } => handle_config(&paths, &mut settings, threshold, currency)?,
    }

    Ok(())
}
