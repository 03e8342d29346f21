//! TOML configuration file support.
//!
//! Settings that rarely change between runs can live in a config file instead of
//! on the command line:
//!
//! ```toml
//! # normalyzer.toml
//! [io]
//! delim_in = "\t"
//! delim_out = ","
//! write_intermediate = false
//! strict_design = true
//!
//! [assembly]
//! annotation_columns = ["rt", "mz", "intensity", "charge", "quality"]
//! sample_columns = ["intensity"]
//! nan_fill = "NA"
//! ```
//!
//! Command-line flags take precedence over file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use openms_normalyzer::matrix::AssemblyConfig;

use super::delimiter::parse_delimiter;

/// Root configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Input/output settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Column selection and missing-value rendering.
    #[serde(default)]
    pub assembly: AssemblyConfig,
}

/// Input/output settings.
#[derive(Debug, Default, Deserialize)]
pub struct IoConfig {
    /// Delimiter of the consensus section (`\t`, `tab`, `comma`, or one character).
    pub delim_in: Option<String>,

    /// Delimiter of the output matrix.
    pub delim_out: Option<String>,

    /// Write the `<input>.cons_only` intermediate file.
    pub write_intermediate: Option<bool>,

    /// Verify the design matrix `sample` column against the discovered samples.
    pub strict_design: Option<bool>,
}

impl IoConfig {
    /// Parsed input delimiter, if configured.
    pub fn delim_in(&self) -> Result<Option<u8>> {
        parse_optional(self.delim_in.as_deref(), "delim_in")
    }

    /// Parsed output delimiter, if configured.
    pub fn delim_out(&self) -> Result<Option<u8>> {
        parse_optional(self.delim_out.as_deref(), "delim_out")
    }
}

fn parse_optional(value: Option<&str>, key: &str) -> Result<Option<u8>> {
    value
        .map(|v| parse_delimiter(v).map_err(anyhow::Error::msg))
        .transpose()
        .with_context(|| format!("Invalid value for io.{} in config file", key))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [io]
            delim_in = "tab"
            delim_out = ","
            write_intermediate = false
            strict_design = true

            [assembly]
            annotation_columns = ["rt", "mz"]
            sample_columns = ["intensity", "width"]
            nan_fill = "NaN"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.io.delim_in().unwrap(), Some(b'\t'));
        assert_eq!(config.io.delim_out().unwrap(), Some(b','));
        assert_eq!(config.io.write_intermediate, Some(false));
        assert_eq!(config.io.strict_design, Some(true));
        assert_eq!(config.assembly.annotation_attributes, vec!["rt", "mz"]);
        assert_eq!(config.assembly.sample_attributes, vec!["intensity", "width"]);
        assert_eq!(config.assembly.nan_fill, "NaN");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [io]
            delim_out = ";"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.io.delim_in().unwrap(), None);
        assert_eq!(config.io.delim_out().unwrap(), Some(b';'));
        assert_eq!(config.assembly, AssemblyConfig::default());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.io.write_intermediate, None);
        assert_eq!(config.assembly.nan_fill, "NA");
    }

    #[test]
    fn test_invalid_delimiter() {
        let config = Config::from_str("[io]\ndelim_in = \"ab\"\n").unwrap();
        assert!(config.io.delim_in().is_err());
    }
}
