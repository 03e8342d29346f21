/// Errors that can occur while assembling the output matrix
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// An expected annotation or sample column is absent from the consensus table
    #[error("Missing column '{0}' in consensus table; column names must follow <attribute>_cf / <attribute>_<sample>")]
    MissingColumn(String),

    /// The design binding does not cover a sample being materialized
    #[error("No design matrix entry bound to sample {0}")]
    UnboundSample(u32),

    /// Assembly configuration cannot produce a valid two-row header
    #[error("Invalid assembly configuration: {0}")]
    InvalidConfig(String),

    /// I/O error writing the matrix
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV writing error
    #[error("CSV writing error: {0}")]
    CsvError(#[from] csv::Error),
}
