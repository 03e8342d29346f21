//! # Design Matrix
//!
//! NormalyzerDE groups samples by biological replicate. The grouping and the
//! display name of each sample come from an external, whitespace-delimited design
//! table:
//!
//! ```text
//! name      biorep  sample
//! ctrl_a    1       0
//! ctrl_b    1       1
//! treat_a   2       2
//! ```
//!
//! `name` and `biorep` are required. The optional `sample` column states which
//! consensus sample number a row describes and enables strict binding.

mod binder;
mod error;
mod matrix;


pub use binder::{BoundDesign, BoundSample, DesignBinder};
pub use error::DesignError;
pub use matrix::{DesignMatrix, DesignRow, BIOREP_COLUMN, NAME_COLUMN, SAMPLE_COLUMN};
