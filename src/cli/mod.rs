use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod convert;
mod delimiter;

pub use delimiter::parse_delimiter;

/// Convert OpenMS consensus reports into NormalyzerDE input matrices
#[derive(Parser, Debug)]
#[command(name = "openms-to-normalyzer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// OpenMS TSV report
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Normalyzer formatted report
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Design matrix with `name` and `biorep` columns (whitespace-delimited)
    #[arg(short, long, value_name = "FILE")]
    design: Option<PathBuf>,

    /// Delimiter of the consensus section [default: tab]
    #[arg(long = "delim_in", alias = "delim-in", value_parser = parse_delimiter)]
    delim_in: Option<u8>,

    /// Delimiter of the output matrix [default: tab]
    #[arg(long = "delim_out", alias = "delim-out", value_parser = parse_delimiter)]
    delim_out: Option<u8>,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Parse the consensus section in memory instead of writing <input>.cons_only
    #[arg(long)]
    no_intermediate: bool,

    /// Require a `sample` column in the design matrix and verify its order
    #[arg(long)]
    strict_design: bool,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    convert::run(cli)
}
