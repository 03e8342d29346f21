//! # openms-to-normalyzer
//!
//! Command-line tool converting OpenMS consensus feature reports into the
//! two-row-header matrix read by NormalyzerDE.
//!
//! ## Usage
//!
//! ```bash
//! # Default: every sample column gets replicate group 1
//! openms-to-normalyzer -i consensus.tsv -o normalyzer.tsv
//!
//! # Sample names and replicate groups from a design matrix
//! openms-to-normalyzer -i consensus.tsv -o normalyzer.tsv --design design.tsv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
