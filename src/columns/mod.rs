//! # Column Naming
//!
//! OpenMS names consensus columns `<attribute>_<suffix>`: joint attributes of the
//! consensus feature use the suffix `cf` (`rt_cf`, `intensity_cf`), per-sample
//! attributes use the sample (map) number (`intensity_0`, `intensity_1`).
//!
//! This module turns that naming convention into an explicit [`ColumnKind`] and
//! derives the set of samples present in a table.

mod error;
mod naming;


pub use error::ColumnError;
pub use naming::{
    annotation_column_name, parse_column, sample_column_name, sample_numbers, ColumnKind,
    SampleNumbers, CONSENSUS_FEATURE_SUFFIX,
};
