//! # Matrix Assembly
//!
//! NormalyzerDE reads a matrix whose first two rows are headers:
//!
//! ```text
//! -1     0      0             0          0           1            1
//! rt_cf  mz_cf  intensity_cf  charge_cf  quality_cf  intensity_1  intensity_2
//! 1201.5 455.27 30000         2          0.91        10000        20000
//! ```
//!
//! The first row marks column roles (`-1` for the id column, `0` for annotation,
//! a replicate group for samples); the second carries the labels. This module
//! selects the relevant consensus columns, fills missing values, and builds both
//! header rows, optionally from a bound design matrix.

mod assembler;
mod config;
mod error;
mod output;


pub use assembler::MatrixAssembler;
pub use config::{AssemblyConfig, DEFAULT_ANNOTATION_ATTRIBUTES, DEFAULT_NAN_FILL, DEFAULT_SAMPLE_ATTRIBUTES};
pub use error::MatrixError;
pub use output::{OutputMatrix, ROLE_ANNOTATION, ROLE_ID, ROLE_SAMPLE};
