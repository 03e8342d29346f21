use crate::columns::ColumnError;
use crate::consensus::ConsensusError;
use crate::design::DesignError;
use crate::matrix::MatrixError;

/// Errors that can abort a conversion run
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Reading the report or parsing its consensus section failed
    #[error("Consensus extraction failed: {0}")]
    Consensus(#[from] ConsensusError),

    /// A consensus column name does not follow the naming convention
    #[error("Column naming error: {0}")]
    Column(#[from] ColumnError),

    /// Loading or binding the design matrix failed
    #[error("Design matrix error: {0}")]
    Design(#[from] DesignError),

    /// Assembling or writing the output matrix failed
    #[error("Matrix assembly failed: {0}")]
    Matrix(#[from] MatrixError),
}
