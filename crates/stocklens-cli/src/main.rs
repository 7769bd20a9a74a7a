// Rust guideline compliant 2026-02-06

//! Stocklens CLI Application
//!
//! Command-line interface for the Stocklens inventory reporting system.

use clap::Parser;
use tracing::Level;

pub mod commands;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;

use stocklens_core::{DisplayFilter, JsonFileStore, DEFAULT_SETTINGS_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "stk",
    version,
    about = "Stocklens: inventory reporting for stock ledger exports",
    long_about = "Stocklens reads semicolon-delimited stock ledger exports and reports on inventory health: stock levels against configurable thresholds, depleted products, and stock volume per product group.",
    after_help = "Examples:\n  stk report data/16-05.CSV\n  stk report data/16-05.CSV --category FERRAMENTAS --top 10\n  stk low-stock data/16-05.CSV --json\n  stk thresholds set 5 50\n  stk exclusions add --group \"97 - USO E CONSUMO\"\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom settings file path
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Report on a ledger export
    Report {
        /// Path to the stock ledger export
        ledger: String,

        /// Only show products in this category
        #[arg(long)]
        category: Option<String>,

        /// Only show products in this group
        #[arg(long)]
        group: Option<String>,

        /// Only show products whose name contains this text
        #[arg(long)]
        name: Option<String>,

        /// Report on excluded products too
        #[arg(long)]
        include_excluded: bool,

        /// Size of the top-stock ranking (default 7)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show stock volume per product group
    Groups {
        /// Path to the stock ledger export
        ledger: String,
    },

    /// Show products at or below the low threshold
    LowStock {
        /// Path to the stock ledger export
        ledger: String,
    },

    /// Show products with no remaining stock
    OutOfStock {
        /// Path to the stock ledger export
        ledger: String,
    },

    /// Show how many products fall in each stock level
    Levels {
        /// Path to the stock ledger export
        ledger: String,
    },

    /// Manage stock level thresholds
    Thresholds {
        #[command(subcommand)]
        action: ThresholdsAction,
    },

    /// Manage report exclusions
    Exclusions {
        #[command(subcommand)]
        action: ExclusionsAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ThresholdsAction {
    /// Show the configured thresholds
    Show,

    /// Set both thresholds
    Set {
        /// Inclusive upper bound of the Low level
        low: i64,

        /// Inclusive upper bound of the Medium level
        medium: i64,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ExclusionsAction {
    /// Show the configured exclusions
    Show,

    /// Replace the exclusion sets (no flags clears them)
    Set {
        /// Groups to exclude
        #[arg(long, value_delimiter = ',')]
        group: Vec<String>,

        /// Categories to exclude
        #[arg(long, value_delimiter = ',')]
        category: Vec<String>,

        /// Product codes to exclude
        #[arg(long, value_delimiter = ',')]
        code: Vec<String>,
    },

    /// Add entries to the exclusion sets
    Add {
        /// Groups to start excluding
        #[arg(long, value_delimiter = ',')]
        group: Vec<String>,

        /// Categories to start excluding
        #[arg(long, value_delimiter = ',')]
        category: Vec<String>,

        /// Product codes to start excluding
        #[arg(long, value_delimiter = ',')]
        code: Vec<String>,
    },

    /// Remove entries from the exclusion sets
    Remove {
        /// Groups to stop excluding
        #[arg(long, value_delimiter = ',')]
        group: Vec<String>,

        /// Categories to stop excluding
        #[arg(long, value_delimiter = ',')]
        category: Vec<String>,

        /// Product codes to stop excluding
        #[arg(long, value_delimiter = ',')]
        code: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;

    // Determine output format and color usage
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    let formatter = create_formatter(format, use_color);

    let settings_path = cli
        .config
        .unwrap_or_else(|| DEFAULT_SETTINGS_FILE.to_string());
    let store = JsonFileStore::new(settings_path);

    match cli.command {
        Some(Commands::Report {
            ledger,
            category,
            group,
            name,
            include_excluded,
            top,
        }) => {
            let filter = DisplayFilter {
                category,
                group,
                name_contains: name,
            };
            commands::report::execute(
                ledger,
                filter,
                include_excluded,
                top,
                &store,
                formatter.as_ref(),
            )?;
        }
        Some(Commands::Groups { ledger }) => {
            commands::groups::execute(ledger, &store, formatter.as_ref())?;
        }
        Some(Commands::LowStock { ledger }) => {
            commands::low_stock::execute(ledger, &store, formatter.as_ref())?;
        }
        Some(Commands::OutOfStock { ledger }) => {
            commands::out_of_stock::execute(ledger, &store, formatter.as_ref())?;
        }
        Some(Commands::Levels { ledger }) => {
            commands::levels::execute(ledger, &store, formatter.as_ref())?;
        }
        Some(Commands::Thresholds { action }) => match action {
            ThresholdsAction::Show => {
                commands::thresholds::show(&store, formatter.as_ref())?;
            }
            ThresholdsAction::Set { low, medium } => {
                commands::thresholds::set(low, medium, &store)?;
            }
        },
        Some(Commands::Exclusions { action }) => match action {
            ExclusionsAction::Show => {
                commands::exclusions::show(&store, formatter.as_ref())?;
            }
            ExclusionsAction::Set {
                group,
                category,
                code,
            } => {
                commands::exclusions::set(group, category, code, &store)?;
            }
            ExclusionsAction::Add {
                group,
                category,
                code,
            } => {
                commands::exclusions::add(group, category, code, &store)?;
            }
            ExclusionsAction::Remove {
                group,
                category,
                code,
            } => {
                commands::exclusions::remove(group, category, code, &store)?;
            }
        },
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Installs the global tracing subscriber, writing to stderr so the
/// report output on stdout stays clean.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let level = parse_log_level(log_level)?;
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name.
fn parse_log_level(raw: &str) -> anyhow::Result<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Unknown log level: {}", other),
    }
}
