//! # openms-normalyzer
//!
//! Reshapes OpenMS consensus feature reports into the matrix format read by
//! NormalyzerDE. No normalization happens here; this crate only prepares the
//! input for that stage.
//!
//! ## Pipeline
//!
//! 1. [`consensus`]: keep the `#CONSENSUS`/`CONSENSUS` lines of a mixed-tag report
//!    and parse them into a [`consensus::ConsensusTable`].
//! 2. [`columns`]: classify column names (`<attr>_cf` vs `<attr>_<sample>`) and
//!    collect the sample numbers.
//! 3. [`design`]: optionally load a design matrix and bind its rows to samples.
//! 4. [`matrix`]: select annotation and sample columns, fill missing values, and
//!    prepend the role and label header rows.
//!
//! [`pipeline::convert`] runs all stages against files on disk.
//!
//! ## Example
//!
//! ```rust
//! use openms_normalyzer::prelude::*;
//!
//! let report = "#CONSENSUS\trt_cf\tmz_cf\tintensity_cf\tcharge_cf\tquality_cf\tintensity_0\tintensity_1\n\
//!               CONSENSUS\t10.0\t500.1\t300\t2\t0.9\t100\t200\n";
//! let lines = extract_consensus_lines(report.as_bytes())?;
//! let table = ConsensusTable::from_lines(&lines, b'\t')?;
//! let samples = sample_numbers(table.headers())?;
//!
//! let matrix = MatrixAssembler::default().assemble(&table, &samples, None)?;
//! assert_eq!(matrix.shape(), (3, 7));
//! assert_eq!(matrix.role_row()[0], "-1");
//! # Ok::<(), openms_normalyzer::pipeline::ConvertError>(())
//! ```

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod columns;
pub mod consensus;
pub mod design;
pub mod matrix;
pub mod pipeline;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::columns::{parse_column, sample_numbers, ColumnError, ColumnKind, SampleNumbers};
    pub use crate::consensus::{
        extract_consensus_file, extract_consensus_lines, intermediate_path, write_intermediate,
        ConsensusError, ConsensusTable,
    };
    pub use crate::design::{BoundDesign, DesignBinder, DesignError, DesignMatrix};
    pub use crate::matrix::{AssemblyConfig, MatrixAssembler, MatrixError, OutputMatrix};
    pub use crate::pipeline::{convert, ConversionSummary, ConvertError, ConvertOptions};
}
