use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use super::ColumnError;

/// Suffix marking a consolidated feature column shared by all samples
pub const CONSENSUS_FEATURE_SUFFIX: &str = "cf";

/// Role of a consensus column, derived from its `<attribute>_<suffix>` name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// `<attribute>_cf`: a joint attribute of the consensus feature
    Annotation {
        /// Attribute name (e.g. `rt`, `mz`)
        attribute: String,
    },
    /// `<attribute>_<sample>`: an attribute measured in a single sample
    Sample {
        /// Attribute name (e.g. `intensity`)
        attribute: String,
        /// Sample (map) number
        sample: u32,
    },
}

impl ColumnKind {
    /// Attribute part of the column name
    pub fn attribute(&self) -> &str {
        match self {
            ColumnKind::Annotation { attribute } | ColumnKind::Sample { attribute, .. } => attribute,
        }
    }

    /// Sample number for sample columns
    pub fn sample(&self) -> Option<u32> {
        match self {
            ColumnKind::Annotation { .. } => None,
            ColumnKind::Sample { sample, .. } => Some(*sample),
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Annotation { attribute } => write!(f, "{}", annotation_column_name(attribute)),
            ColumnKind::Sample { attribute, sample } => {
                write!(f, "{}", sample_column_name(attribute, *sample))
            }
        }
    }
}

/// Classify a consensus column name.
///
/// Any name ending in `cf` is an annotation column. Every other name must end in
/// `_<integer>`; a name without an underscore is treated as a bare suffix.
pub fn parse_column(name: &str) -> Result<ColumnKind, ColumnError> {
    let (attribute, suffix) = match name.rsplit_once('_') {
        Some((attribute, suffix)) => (attribute, suffix),
        None => ("", name),
    };

    if name.ends_with(CONSENSUS_FEATURE_SUFFIX) {
        return Ok(ColumnKind::Annotation {
            attribute: attribute.to_string(),
        });
    }

    let sample = suffix
        .parse::<u32>()
        .map_err(|_| ColumnError::MalformedSuffix {
            column: name.to_string(),
            suffix: suffix.to_string(),
        })?;

    Ok(ColumnKind::Sample {
        attribute: attribute.to_string(),
        sample,
    })
}

/// Name of the annotation column for a joint attribute: `<attribute>_cf`
pub fn annotation_column_name(attribute: &str) -> String {
    format!("{}_{}", attribute, CONSENSUS_FEATURE_SUFFIX)
}

/// Name of the column holding `attribute` for one sample: `<attribute>_<sample>`
pub fn sample_column_name(attribute: &str, sample: u32) -> String {
    format!("{}_{}", attribute, sample)
}

/// Distinct sample numbers found in a consensus table, in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleNumbers(BTreeSet<u32>);

impl SampleNumbers {
    /// Number of distinct samples
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no sample column was found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a sample number is present
    pub fn contains(&self, sample: u32) -> bool {
        self.0.contains(&sample)
    }

    /// Sample numbers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Sample numbers in ascending order, collected
    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

impl FromIterator<u32> for SampleNumbers {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Derive the sample numbers from consensus column names.
///
/// The first column is the id column and is skipped. Fails on the first
/// non-annotation column whose suffix is not an integer.
pub fn sample_numbers<S: AsRef<str>>(headers: &[S]) -> Result<SampleNumbers, ColumnError> {
    let mut samples = BTreeSet::new();
    for name in headers.iter().skip(1) {
        let kind = parse_column(name.as_ref())?;
        debug!("Column '{}' classified as {:?}", name.as_ref(), kind);
        if let Some(sample) = kind.sample() {
            samples.insert(sample);
        }
    }
    Ok(SampleNumbers(samples))
}
