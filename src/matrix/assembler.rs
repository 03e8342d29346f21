use log::{debug, info};

use super::output::{ROLE_ANNOTATION, ROLE_ID, ROLE_SAMPLE};
use super::{AssemblyConfig, MatrixError, OutputMatrix};
use crate::columns::{annotation_column_name, sample_column_name, SampleNumbers};
use crate::consensus::ConsensusTable;
use crate::design::BoundDesign;

/// A selected output column and the header cells it contributes
#[derive(Debug)]
struct TargetColumn {
    source: String,
    role: String,
    label: String,
}

/// Builds the two-row-header matrix from a consensus table.
///
/// Annotation columns come first, then sample columns grouped by attribute with
/// samples in ascending order inside each group. Without a design every sample
/// column gets the role `1` and keeps its source name as label; with a design the
/// bound `biorep` and `name` take their place.
#[derive(Debug, Clone, Default)]
pub struct MatrixAssembler {
    config: AssemblyConfig,
}

impl MatrixAssembler {
    /// Create an assembler for the given column configuration
    pub fn new(config: AssemblyConfig) -> Self {
        Self { config }
    }

    /// Column configuration in use
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Source column names in output order
    pub fn target_columns(&self, samples: &SampleNumbers) -> Vec<String> {
        let mut names: Vec<String> = self
            .config
            .annotation_attributes
            .iter()
            .map(|attr| annotation_column_name(attr))
            .collect();
        for attr in &self.config.sample_attributes {
            names.extend(samples.iter().map(|sample| sample_column_name(attr, sample)));
        }
        names
    }

    fn plan(&self, samples: &SampleNumbers, design: Option<&BoundDesign>) -> Result<Vec<TargetColumn>, MatrixError> {
        let mut columns = Vec::new();

        for (i, attr) in self.config.annotation_attributes.iter().enumerate() {
            let name = annotation_column_name(attr);
            columns.push(TargetColumn {
                role: if i == 0 { ROLE_ID } else { ROLE_ANNOTATION }.to_string(),
                label: name.clone(),
                source: name,
            });
        }

        let prefix_labels = self.config.sample_attributes.len() > 1;
        for attr in &self.config.sample_attributes {
            for sample in samples.iter() {
                let source = sample_column_name(attr, sample);
                let (role, label) = match design {
                    None => (ROLE_SAMPLE.to_string(), source.clone()),
                    Some(bound) => {
                        let entry = bound.get(sample).ok_or(MatrixError::UnboundSample(sample))?;
                        let label = if prefix_labels {
                            format!("{}_{}", attr, entry.name)
                        } else {
                            entry.name.clone()
                        };
                        (entry.biorep.clone(), label)
                    }
                };
                columns.push(TargetColumn { source, role, label });
            }
        }

        Ok(columns)
    }

    /// Assemble the output matrix.
    ///
    /// Fails if any target column is absent from the table. Missing cells are
    /// replaced by the configured sentinel; present cells are copied verbatim.
    pub fn assemble(
        &self,
        table: &ConsensusTable,
        samples: &SampleNumbers,
        design: Option<&BoundDesign>,
    ) -> Result<OutputMatrix, MatrixError> {
        self.config.validate()?;
        let columns = self.plan(samples, design)?;

        let indices = columns
            .iter()
            .map(|c| {
                table
                    .column_index(&c.source)
                    .ok_or_else(|| MatrixError::MissingColumn(c.source.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Selected source columns {:?}", indices);

        let nan_fill = &self.config.nan_fill;
        let data: Vec<Vec<String>> = table
            .rows()
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row[i].clone().unwrap_or_else(|| nan_fill.clone()))
                    .collect()
            })
            .collect();

        let (role_row, label_row): (Vec<String>, Vec<String>) =
            columns.into_iter().map(|c| (c.role, c.label)).unzip();

        let matrix = OutputMatrix::from_parts(role_row, label_row, data);
        let (rows, cols) = matrix.shape();
        info!(
            "Assembled matrix with {} rows x {} columns ({} samples, design: {})",
            rows,
            cols,
            samples.len(),
            if design.is_some() { "yes" } else { "no" }
        );
        Ok(matrix)
    }
}
