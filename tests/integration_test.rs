//! Integration tests for openms-normalyzer
//!
//! These tests run the full pipeline from a raw report on disk to the written matrix.

use openms_normalyzer::columns::ColumnError;
use openms_normalyzer::consensus::intermediate_path;
use openms_normalyzer::pipeline::{convert, ConvertError, ConvertOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Mixed-tag report in the shape OpenMS TextExporter produces
const REPORT: &str = "#MAP\tid\tfilename\tlabel\tsize
MAP\t1\tsample_1.featureXML\t\t2
MAP\t2\tsample_2.featureXML\t\t2
#CONSENSUS\trt_cf\tmz_cf\tintensity_cf\tcharge_cf\tquality_cf\tintensity_1\tintensity_2
CONSENSUS\t1201.5\t455.27\t30000\t2\t0.91\t10000\t20000
PEPTIDE\t1201.4\t455.27\t2\tPEPTIDEK
CONSENSUS\t1530.2\t612.8\t45000\t3\t\t15000\t30000
#UNASSIGNEDPEPTIDE\trt\tmz\tcharge
UNASSIGNEDPEPTIDE\t800.1\t300.2\t1
";

fn write_report(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("consensus.tsv");
    fs::write(&path, content).unwrap();
    path
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

/// Two consensus rows, two samples, no design
#[test]
fn test_default_header_scenario() {
    let dir = tempdir().unwrap();
    let input = write_report(&dir, REPORT);
    let output = dir.path().join("normalyzer.tsv");

    let summary = convert(&ConvertOptions::new(&input, &output)).unwrap();
    assert_eq!(summary.shape, (4, 7));
    assert_eq!(summary.sample_count, 2);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], ["-1", "0", "0", "0", "0", "1", "1"]);
    assert_eq!(
        rows[1],
        ["rt_cf", "mz_cf", "intensity_cf", "charge_cf", "quality_cf", "intensity_1", "intensity_2"]
    );
    assert_eq!(rows[2], ["1201.5", "455.27", "30000", "2", "0.91", "10000", "20000"]);
}

/// Design matrix supplies names and replicate groups
#[test]
fn test_design_header_scenario() {
    let dir = tempdir().unwrap();
    let input = write_report(&dir, REPORT);
    let design = dir.path().join("design.tsv");
    fs::write(&design, "name    biorep\nS1  1\nS2  1\n").unwrap();
    let output = dir.path().join("normalyzer.tsv");

    convert(&ConvertOptions::new(&input, &output).with_design(&design)).unwrap();

    let rows = read_rows(&output);
    assert_eq!(rows[0][5..], ["1", "1"]);
    assert_eq!(rows[1][5..], ["S1", "S2"]);
    assert_eq!(rows[0][..5], ["-1", "0", "0", "0", "0"]);
}

/// An empty quality cell is written as the sentinel
#[test]
fn test_missing_value_scenario() {
    let dir = tempdir().unwrap();
    let input = write_report(&dir, REPORT);
    let output = dir.path().join("normalyzer.tsv");

    convert(&ConvertOptions::new(&input, &output)).unwrap();

    let rows = read_rows(&output);
    assert_eq!(rows[3][4], "NA");
    assert_eq!(rows[3][0], "1530.2");
}

/// A non-integer sample suffix aborts the run before any output exists
#[test]
fn test_malformed_suffix_scenario() {
    let dir = tempdir().unwrap();
    let report = "#CONSENSUS\trt_cf\tmz_cf\tintensity_cf\tcharge_cf\tquality_cf\tintensity_X
CONSENSUS\t1.0\t2.0\t3\t1\t0.5\t4
";
    let input = write_report(&dir, report);
    let output = dir.path().join("normalyzer.tsv");

    let err = convert(&ConvertOptions::new(&input, &output)).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Column(ColumnError::MalformedSuffix { ref suffix, .. }) if suffix == "X"
    ));
    assert!(!output.exists());
}

/// Re-running over an existing intermediate file gives byte-identical output
#[test]
fn test_rerun_is_idempotent() {
    let dir = tempdir().unwrap();
    let input = write_report(&dir, REPORT);
    let output = dir.path().join("normalyzer.tsv");
    let options = ConvertOptions::new(&input, &output);

    convert(&options).unwrap();
    let first = fs::read(&output).unwrap();
    let cons_first = fs::read(intermediate_path(&input)).unwrap();

    convert(&options).unwrap();
    assert_eq!(fs::read(&output).unwrap(), first);
    assert_eq!(fs::read(intermediate_path(&input)).unwrap(), cons_first);
}

/// Every present source value reaches its output cell unchanged
#[test]
fn test_values_copied_verbatim() {
    let dir = tempdir().unwrap();
    let report = "#CONSENSUS\trt_cf\tmz_cf\tintensity_cf\tcharge_cf\tquality_cf\tintensity_0
CONSENSUS\t1.50e3\t0455.270\t3.0E+04\t+2\t-0.0\t1e-7
";
    let input = write_report(&dir, report);
    let output = dir.path().join("normalyzer.tsv");

    convert(&ConvertOptions::new(&input, &output)).unwrap();

    let rows = read_rows(&output);
    assert_eq!(rows[2], ["1.50e3", "0455.270", "3.0E+04", "+2", "-0.0", "1e-7"]);
}

/// Missing annotation columns surface as a schema mismatch
#[test]
fn test_schema_mismatch() {
    let dir = tempdir().unwrap();
    let report = "#CONSENSUS\trt_cf\tmz_cf\tintensity_0\nCONSENSUS\t1\t2\t3\n";
    let input = write_report(&dir, report);
    let output = dir.path().join("normalyzer.tsv");

    let err = convert(&ConvertOptions::new(&input, &output)).unwrap_err();
    assert!(matches!(err, ConvertError::Matrix(_)));
    assert!(err.to_string().contains("intensity_cf"));
    assert!(!output.exists());
}

/// Comma-delimited consensus section with a custom output delimiter
#[test]
fn test_custom_delimiters() {
    let dir = tempdir().unwrap();
    let report = "#CONSENSUS,rt_cf,mz_cf,intensity_cf,charge_cf,quality_cf,intensity_0,intensity_1
CONSENSUS,1,2,3,1,0.5,10,
";
    let input = write_report(&dir, report);
    let output = dir.path().join("normalyzer.csv");

    convert(&ConvertOptions::new(&input, &output).with_delimiters(b',', b';')).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "-1;0;0;0;0;1;1");
    assert_eq!(lines[2], "1;2;3;1;0.5;10;NA");
}

/// A report without a consensus section cannot be converted
#[test]
fn test_report_without_consensus_lines() {
    let dir = tempdir().unwrap();
    let input = write_report(&dir, "#MAP\tid\nMAP\t0\n");
    let output = dir.path().join("normalyzer.tsv");

    let err = convert(&ConvertOptions::new(&input, &output)).unwrap_err();
    assert!(matches!(err, ConvertError::Consensus(_)));
    assert!(!output.exists());
}
