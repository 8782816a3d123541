//! # quickinsight Command-Line Entry Point
//!
//! ```text
//! main()
//!   │
//!   ├─> Install the tracing subscriber (stderr, RUST_LOG aware)
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   │
//!   └─> Run the subcommand
//!       ├─> analyse: load CSV, clean if asked, print the report
//!       └─> clean:   load CSV, clean, write CSV
//! ```
//!
//! ```bash
//! quickinsight analyse data.csv --fill-missing --metric sales --dimension region
//! quickinsight clean data.csv --remove-duplicates --output cleaned.csv
//! RUST_LOG=debug quickinsight analyse data.csv --json
//! ```

#![expect(clippy::print_stdout)] // Allow println! in main binary

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    quickinsight::logging::init()?;

    let cli = cli::Cli::parse();
    cli::run_command(cli.command)
}
