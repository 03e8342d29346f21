use log::{info, warn};

use super::{DesignError, DesignMatrix, SAMPLE_COLUMN};
use crate::columns::SampleNumbers;

/// A design row paired with the sample number it labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundSample {
    /// Sample number in the consensus table
    pub sample: u32,
    /// Display name from the design
    pub name: String,
    /// Replicate group from the design
    pub biorep: String,
}

/// Design rows bound to the discovered samples, in ascending sample order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundDesign {
    samples: Vec<BoundSample>,
}

impl BoundDesign {
    /// Bound samples in ascending sample-number order
    pub fn samples(&self) -> &[BoundSample] {
        &self.samples
    }

    /// Number of bound samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if nothing was bound
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Look up the binding for a sample number
    pub fn get(&self, sample: u32) -> Option<&BoundSample> {
        self.samples.iter().find(|s| s.sample == sample)
    }
}

/// Pairs design rows with the sample numbers found in a consensus table.
///
/// Rows are matched positionally: design row `i` labels the `i`-th smallest sample
/// number. The row count must match; the order is only checked in strict mode,
/// which requires the design to carry a `sample` column.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignBinder {
    strict: bool,
}

impl DesignBinder {
    /// Positional binder without order validation
    pub fn new() -> Self {
        Self::default()
    }

    /// Binder that verifies each design row names the sample at its position
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Whether order validation is enabled
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Bind design rows to sample numbers
    pub fn bind(&self, design: &DesignMatrix, samples: &SampleNumbers) -> Result<BoundDesign, DesignError> {
        if design.len() != samples.len() {
            return Err(DesignError::CountMismatch {
                design_rows: design.len(),
                samples: samples.len(),
            });
        }

        if self.strict && !design.has_sample_column() {
            return Err(DesignError::MissingSampleColumn(SAMPLE_COLUMN.to_string()));
        }

        let mut bound = Vec::with_capacity(samples.len());
        for (row, (expected, design_row)) in samples.iter().zip(design.rows()).enumerate() {
            if self.strict {
                if let Some(design_sample) = design_row.sample {
                    if design_sample != expected {
                        return Err(DesignError::Misaligned {
                            row,
                            design_sample,
                            expected,
                        });
                    }
                }
            }
            bound.push(BoundSample {
                sample: expected,
                name: design_row.name.clone(),
                biorep: design_row.biorep.clone(),
            });
        }

        if self.strict {
            info!("Design matrix verified against {} samples", bound.len());
        } else {
            warn!(
                "Design matrix bound positionally to samples {:?}; row order is not verified",
                samples.to_vec()
            );
        }

        Ok(BoundDesign { samples: bound })
    }
}
