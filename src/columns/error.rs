/// Errors raised while interpreting consensus column names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    /// A sample column whose trailing token is not an integer sample number
    #[error("Malformed sample suffix '{suffix}' in column '{column}': expected <attribute>_<integer>")]
    MalformedSuffix {
        /// Full column name
        column: String,
        /// Token after the last underscore
        suffix: String,
    },
}
