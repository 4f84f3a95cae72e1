//! Notebook output cleaner.
//!
//! Recursively finds `.ipynb` files under a directory, clears the cached
//! outputs of every cell, and rewrites only the notebooks that changed.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use nbclean::clean;
use nbclean::exit_codes;
use nbclean::logging;
use nbclean::report::ConsoleReporter;

#[derive(Parser)]
#[command(
    name = "nbclean",
    version,
    about = "Clear cached cell outputs from every notebook under a directory"
)]
struct Cli {
    /// Directory to scan recursively. Hidden entries are skipped.
    root: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    clean::run(cli.root, &mut ConsoleReporter)?;
    Ok(())
}
