/// Errors that can occur while extracting or parsing consensus rows
#[derive(Debug, thiserror::Error)]
pub enum ConsensusError {
    /// I/O error reading the report or writing the intermediate file
    #[error("Failed to read or write file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// No `#CONSENSUS` header line was found
    #[error("Consensus table is empty: no header line found")]
    EmptyTable,

    /// A data row carries more fields than the header names
    #[error("Consensus row {row} has {found} fields but the header names {expected}")]
    RaggedRow {
        /// Zero-based data row index
        row: usize,
        /// Number of header columns
        expected: usize,
        /// Number of fields found on the row
        found: usize,
    },
}
