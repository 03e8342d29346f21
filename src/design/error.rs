/// Errors that can occur while loading or binding a design matrix
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    /// I/O error reading the design file
    #[error("Failed to read design matrix: {0}")]
    IoError(#[from] std::io::Error),

    /// The design file has no header line
    #[error("Design matrix is empty")]
    Empty,

    /// Missing required column in the design header
    #[error("Missing required design matrix column: {0}")]
    MissingColumn(String),

    /// A row carries fewer fields than the header
    #[error("Design matrix line {line} has {found} fields, expected {expected}")]
    ShortRow {
        /// One-based line number in the design file
        line: usize,
        /// Number of header columns
        expected: usize,
        /// Number of fields on the line
        found: usize,
    },

    /// A row carries more fields than the header
    #[error("Design matrix line {line} has {found} fields, expected {expected}")]
    LongRow {
        /// One-based line number in the design file
        line: usize,
        /// Number of header columns
        expected: usize,
        /// Number of fields on the line
        found: usize,
    },

    /// The `sample` column holds a value that is not a sample number
    #[error("Invalid sample number '{value}' on design matrix line {line}")]
    InvalidSample {
        /// One-based line number in the design file
        line: usize,
        /// Offending value
        value: String,
    },

    /// Design rows and discovered samples differ in count
    #[error("Design matrix has {design_rows} rows but the consensus table has {samples} samples")]
    CountMismatch {
        /// Number of design rows
        design_rows: usize,
        /// Number of discovered sample numbers
        samples: usize,
    },

    /// Strict binding requested but the design does not say which sample each row describes
    #[error("Strict design binding requires a '{0}' column in the design matrix")]
    MissingSampleColumn(String),

    /// Strict binding found a design row describing a different sample than its position
    #[error("Design matrix row {row} describes sample {design_sample} but sample {expected} is at that position")]
    Misaligned {
        /// Zero-based design row index
        row: usize,
        /// Sample number given by the design row
        design_sample: u32,
        /// Sample number expected at that position
        expected: u32,
    },
}
