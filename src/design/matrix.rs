use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::DesignError;

/// Column holding the biological-replicate group of each sample
pub const BIOREP_COLUMN: &str = "biorep";

/// Column holding the display name of each sample
pub const NAME_COLUMN: &str = "name";

/// Optional column holding the sample number a design row describes
pub const SAMPLE_COLUMN: &str = "sample";

/// One design matrix row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignRow {
    /// Display name used in the output label row
    pub name: String,
    /// Replicate group used in the output role row
    pub biorep: String,
    /// Sample number, when the design carries a `sample` column
    pub sample: Option<u32>,
}

/// Per-sample design table, one row per sample, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignMatrix {
    rows: Vec<DesignRow>,
    has_sample_column: bool,
}

impl DesignMatrix {
    /// Build a design matrix from rows held in memory
    pub fn new(rows: Vec<DesignRow>) -> Self {
        let has_sample_column = !rows.is_empty() && rows.iter().all(|r| r.sample.is_some());
        Self {
            rows,
            has_sample_column,
        }
    }

    /// Load a whitespace-delimited design matrix from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DesignError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a whitespace-delimited design matrix.
    ///
    /// The first non-blank line is the header and must name `biorep` and `name`;
    /// other columns are ignored except `sample`, which is parsed when present.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DesignError> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(i, line)| line.map(|l| (i + 1, l)))
            .filter(|entry| !matches!(entry, Ok((_, l)) if l.trim().is_empty()));

        let (_, header_line) = lines.next().ok_or(DesignError::Empty)??;
        let headers: Vec<&str> = header_line.split_whitespace().collect();

        let position = |column: &str| headers.iter().position(|h| *h == column);
        let biorep_idx =
            position(BIOREP_COLUMN).ok_or_else(|| DesignError::MissingColumn(BIOREP_COLUMN.to_string()))?;
        let name_idx =
            position(NAME_COLUMN).ok_or_else(|| DesignError::MissingColumn(NAME_COLUMN.to_string()))?;
        let sample_idx = position(SAMPLE_COLUMN);

        let mut rows = Vec::new();
        for entry in lines {
            let (line_number, line) = entry?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < headers.len() {
                return Err(DesignError::ShortRow {
                    line: line_number,
                    expected: headers.len(),
                    found: fields.len(),
                });
            }
            if fields.len() > headers.len() {
                return Err(DesignError::LongRow {
                    line: line_number,
                    expected: headers.len(),
                    found: fields.len(),
                });
            }

            let sample = match sample_idx {
                Some(idx) => Some(fields[idx].parse::<u32>().map_err(|_| DesignError::InvalidSample {
                    line: line_number,
                    value: fields[idx].to_string(),
                })?),
                None => None,
            };

            rows.push(DesignRow {
                name: fields[name_idx].to_string(),
                biorep: fields[biorep_idx].to_string(),
                sample,
            });
        }

        debug!("Parsed design matrix with {} rows", rows.len());
        Ok(Self {
            rows,
            has_sample_column: sample_idx.is_some(),
        })
    }

    /// Design rows in file order
    pub fn rows(&self) -> &[DesignRow] {
        &self.rows
    }

    /// Number of design rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the design has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether every row states its sample number
    pub fn has_sample_column(&self) -> bool {
        self.has_sample_column
    }

    /// `name` values in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.name.as_str())
    }

    /// `biorep` values in file order
    pub fn bioreps(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.biorep.as_str())
    }
}
