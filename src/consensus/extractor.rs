use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::ConsensusError;

/// Tag carried by every consensus feature row
pub const CONSENSUS_TAG: &str = "CONSENSUS";

/// Tag carried by the single header line naming the consensus columns
pub const CONSENSUS_HEADER_TAG: &str = "#CONSENSUS";

/// Extension appended to the input path for the consensus-only intermediate file
pub const INTERMEDIATE_EXTENSION: &str = "cons_only";

/// Returns true if the line belongs to the consensus section of a report
pub fn is_consensus_line(line: &str) -> bool {
    line.starts_with(CONSENSUS_TAG) || line.starts_with(CONSENSUS_HEADER_TAG)
}

/// Keep only the consensus lines of a mixed-tag report.
///
/// Trailing whitespace (including the line terminator) is removed; nothing else
/// about a kept line is changed and the original order is preserved.
pub fn extract_consensus_lines<R: BufRead>(reader: R) -> Result<Vec<String>, ConsensusError> {
    let mut kept = Vec::new();
    let mut seen = 0usize;

    for line in reader.lines() {
        let line = line?;
        seen += 1;
        let line = line.trim_end();
        if is_consensus_line(line) {
            kept.push(line.to_string());
        }
    }

    debug!("Kept {} of {} report lines", kept.len(), seen);
    Ok(kept)
}

/// Extract consensus lines from a report on disk
pub fn extract_consensus_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConsensusError> {
    let path = path.as_ref();
    info!("Reading consensus lines from {}", path.display());
    let file = File::open(path)?;
    extract_consensus_lines(BufReader::new(file))
}

/// Path of the consensus-only intermediate file for a given report: `<input>.cons_only`
pub fn intermediate_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let mut name = input.as_ref().as_os_str().to_os_string();
    name.push(".");
    name.push(INTERMEDIATE_EXTENSION);
    PathBuf::from(name)
}

/// Write the kept lines to the intermediate file, one per line.
///
/// The file is flushed and closed before this returns, so it can be re-read immediately.
pub fn write_intermediate<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<(), ConsensusError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    info!("Wrote {} consensus lines to {}", lines.len(), path.display());
    Ok(())
}
