use serde::Deserialize;

use super::MatrixError;

/// Joint attributes materialized as `<attribute>_cf` annotation columns
pub const DEFAULT_ANNOTATION_ATTRIBUTES: &[&str] = &["rt", "mz", "intensity", "charge", "quality"];

/// Per-sample attributes materialized as `<attribute>_<sample>` columns
pub const DEFAULT_SAMPLE_ATTRIBUTES: &[&str] = &["intensity"];

/// Sentinel written for missing values
pub const DEFAULT_NAN_FILL: &str = "NA";

/// Which columns the assembler selects and how missing values are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Joint attributes, in output order
    #[serde(rename = "annotation_columns")]
    pub annotation_attributes: Vec<String>,

    /// Per-sample attributes, in output order
    #[serde(rename = "sample_columns")]
    pub sample_attributes: Vec<String>,

    /// Text written in place of missing values
    pub nan_fill: String,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            annotation_attributes: DEFAULT_ANNOTATION_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            sample_attributes: DEFAULT_SAMPLE_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            nan_fill: DEFAULT_NAN_FILL.to_string(),
        }
    }
}

impl AssemblyConfig {
    /// Create a configuration with explicit attribute lists and the default sentinel
    pub fn new<A, S>(annotation_attributes: A, sample_attributes: S) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            annotation_attributes: annotation_attributes.into_iter().map(Into::into).collect(),
            sample_attributes: sample_attributes.into_iter().map(Into::into).collect(),
            nan_fill: DEFAULT_NAN_FILL.to_string(),
        }
    }

    /// Replace the missing-value sentinel
    pub fn with_nan_fill(mut self, nan_fill: impl Into<String>) -> Self {
        self.nan_fill = nan_fill.into();
        self
    }

    /// Check that the configuration can produce a well-formed header.
    ///
    /// The role row reserves its first cell for `-1`, so at least one annotation
    /// attribute is required.
    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.annotation_attributes.is_empty() {
            return Err(MatrixError::InvalidConfig(
                "at least one annotation column is required".to_string(),
            ));
        }
        if self.sample_attributes.is_empty() {
            return Err(MatrixError::InvalidConfig(
                "at least one sample column attribute is required".to_string(),
            ));
        }
        if self.nan_fill.is_empty() {
            return Err(MatrixError::InvalidConfig(
                "missing-value sentinel must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
