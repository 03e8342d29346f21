//! # Consensus Extraction
//!
//! OpenMS `TextExporter` reports mix several record types in one file, each line
//! tagged by its first field (`#MAP`, `MAP`, `#RUN`, `#CONSENSUS`, `CONSENSUS`,
//! `PEPTIDE`, ...). Only the consensus section is relevant for normalization:
//! the single `#CONSENSUS` line names the columns and every `CONSENSUS` line is one
//! aligned feature across all samples.
//!
//! This module filters a report down to those lines, optionally writes them to a
//! `<input>.cons_only` intermediate file, and parses them into a [`ConsensusTable`].

mod error;
mod extractor;
mod table;


pub use error::ConsensusError;
pub use extractor::{
    extract_consensus_file, extract_consensus_lines, intermediate_path, is_consensus_line,
    write_intermediate, CONSENSUS_HEADER_TAG, CONSENSUS_TAG, INTERMEDIATE_EXTENSION,
};
pub use table::{is_missing_value, ConsensusTable, MISSING_VALUE_TOKENS};
