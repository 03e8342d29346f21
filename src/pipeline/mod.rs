//! # Conversion Pipeline
//!
//! Runs one report through every stage:
//!
//! ```text
//! report ──► consensus lines ──► <input>.cons_only ──► ConsensusTable
//!                                                          │
//!                                   SampleNumbers ◄────────┤
//!                                        │                 │
//!             DesignMatrix ──► DesignBinder (optional)     │
//!                                        │                 ▼
//!                                        └────────► MatrixAssembler ──► output
//! ```
//!
//! Every failure aborts the run. The output file only appears once the whole
//! matrix has been written.

mod error;


use std::fmt;
use std::path::{Path, PathBuf};

use log::info;

use crate::columns::sample_numbers;
use crate::consensus::{
    extract_consensus_file, intermediate_path, write_intermediate, ConsensusTable,
};
use crate::design::{DesignBinder, DesignMatrix};
use crate::matrix::{AssemblyConfig, MatrixAssembler};

pub use error::ConvertError;

/// Default field delimiter for both the intermediate and the output file
pub const DEFAULT_DELIMITER: u8 = b'\t';

/// Number of consensus rows shown in the run preview
const PREVIEW_ROWS: usize = 5;

/// Settings for a single conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Raw OpenMS report
    pub input: PathBuf,
    /// Destination of the output matrix
    pub output: PathBuf,
    /// Optional design matrix supplying sample names and replicate groups
    pub design: Option<PathBuf>,
    /// Delimiter of the consensus section
    pub delim_in: u8,
    /// Delimiter of the output matrix
    pub delim_out: u8,
    /// Write `<input>.cons_only` and parse the table back from it
    pub write_intermediate: bool,
    /// Require the design to state each row's sample number and verify the order
    pub strict_design: bool,
    /// Column selection and missing-value sentinel
    pub assembly: AssemblyConfig,
}

impl ConvertOptions {
    /// Options with default delimiters, intermediate file enabled, no design
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            design: None,
            delim_in: DEFAULT_DELIMITER,
            delim_out: DEFAULT_DELIMITER,
            write_intermediate: true,
            strict_design: false,
            assembly: AssemblyConfig::default(),
        }
    }

    /// Use a design matrix for the sample header rows
    pub fn with_design(mut self, design: impl Into<PathBuf>) -> Self {
        self.design = Some(design.into());
        self
    }

    /// Set the input and output delimiters
    pub fn with_delimiters(mut self, delim_in: u8, delim_out: u8) -> Self {
        self.delim_in = delim_in;
        self.delim_out = delim_out;
        self
    }

    /// Enable or disable the `<input>.cons_only` intermediate file
    pub fn with_intermediate(mut self, write_intermediate: bool) -> Self {
        self.write_intermediate = write_intermediate;
        self
    }

    /// Enable strict design binding
    pub fn with_strict_design(mut self, strict: bool) -> Self {
        self.strict_design = strict;
        self
    }

    /// Replace the assembly configuration
    pub fn with_assembly(mut self, assembly: AssemblyConfig) -> Self {
        self.assembly = assembly;
        self
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    /// `(rows, columns)` of the written matrix, header rows included
    pub shape: (usize, usize),
    /// Number of distinct samples
    pub sample_count: usize,
    /// Number of consensus features
    pub consensus_rows: usize,
    /// Path of the intermediate file, when one was written
    pub intermediate: Option<PathBuf>,
    /// Destination of the output matrix
    pub output: PathBuf,
    /// Header and first rows of the parsed consensus table
    pub preview: String,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Writing matrix with shape ({}, {}), {} samples to {}",
            self.shape.0,
            self.shape.1,
            self.sample_count,
            self.output.display()
        )
    }
}

fn load_table(options: &ConvertOptions) -> Result<(ConsensusTable, Option<PathBuf>), ConvertError> {
    let lines = extract_consensus_file(&options.input)?;

    if options.write_intermediate {
        let cons_path = intermediate_path(&options.input);
        write_intermediate(&cons_path, &lines)?;
        let table = ConsensusTable::from_path(&cons_path, options.delim_in)?;
        Ok((table, Some(cons_path)))
    } else {
        Ok((ConsensusTable::from_lines(&lines, options.delim_in)?, None))
    }
}

fn load_design(path: &Path) -> Result<DesignMatrix, ConvertError> {
    info!("Reading design matrix from {}", path.display());
    Ok(DesignMatrix::from_path(path)?)
}

/// Convert an OpenMS consensus report into a NormalyzerDE matrix
pub fn convert(options: &ConvertOptions) -> Result<ConversionSummary, ConvertError> {
    let (table, intermediate) = load_table(options)?;
    let samples = sample_numbers(table.headers())?;
    info!(
        "Found {} consensus rows and {} samples {:?}",
        table.row_count(),
        samples.len(),
        samples.to_vec()
    );

    let bound = match &options.design {
        Some(path) => {
            let design = load_design(path)?;
            let binder = if options.strict_design {
                DesignBinder::strict()
            } else {
                DesignBinder::new()
            };
            Some(binder.bind(&design, &samples)?)
        }
        None => None,
    };

    let assembler = MatrixAssembler::new(options.assembly.clone());
    let matrix = assembler.assemble(&table, &samples, bound.as_ref())?;
    matrix.write_path(&options.output, options.delim_out)?;

    Ok(ConversionSummary {
        shape: matrix.shape(),
        sample_count: samples.len(),
        consensus_rows: table.row_count(),
        intermediate,
        output: options.output.clone(),
        preview: table.preview(PREVIEW_ROWS),
    })
}
