use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Manage a product catalog stored in a CSV file
#[derive(Parser, Debug)]
#[command(name = "product-catalog")]
#[command(about = "Manage a product catalog stored in a CSV file", long_about = None)]
pub struct CliArgs {
    /// Catalog file the command operates on
    #[arg(
        long = "file",
        short = 'f',
        value_name = "PATH",
        env = "CATALOG_FILE",
        default_value = "products.csv",
        global = true,
        help = "Path to the catalog CSV file"
    )]
    pub file: PathBuf,

    /// Execution strategy for file access
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        global = true,
        help = "Execution strategy: 'sync' for blocking I/O or 'async' for tokio I/O"
    )]
    pub strategy: StrategyType,

    /// Log filter passed to the tracing subscriber
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        env = "CATALOG_LOG",
        default_value = "warn",
        global = true,
        help = "Log filter, e.g. 'debug' or 'product_catalog=trace'"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available execution strategies
#[derive(Clone, Debug, PartialEq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Catalog operations
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create the catalog file, or empty it if it exists
    Init,

    /// Add a product; fails if the id is already present
    Add {
        id: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        price: Decimal,
    },

    /// Print the product with this id
    Get { id: String },

    /// Replace name and price of the product with this id
    Update {
        id: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        price: Decimal,
    },

    /// Remove the product with this id; fails if it is missing
    Delete { id: String },

    /// Print every product as a CSV table
    List,
}
