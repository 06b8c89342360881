//! Product Catalog CLI
//!
//! Command-line interface for managing a product catalog CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- init
//! cargo run -- add 1 "Product 1" 100
//! cargo run -- get 1
//! cargo run -- update 1 "Product 2" 200
//! cargo run -- delete 1
//! cargo run -- --file catalog.csv --strategy async list
//! ```
//!
//! `--file` defaults to `products.csv` and can be set with `CATALOG_FILE`.
//! Logs go to stderr, filtered by `--log-level` / `CATALOG_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success (including `get` finding nothing)
//! - 1: Error (duplicate id, missing id on delete, file not readable, etc.)

use product_catalog::cli;
use product_catalog::strategy;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    let strategy = strategy::create_strategy(args.strategy.clone());

    // Command output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.execute(&args.file, &args.command, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
