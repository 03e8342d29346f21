#![no_main]

use libfuzzer_sys::fuzz_target;

use openms_normalyzer::columns::sample_numbers;
use openms_normalyzer::consensus::{extract_consensus_lines, ConsensusTable};
use openms_normalyzer::matrix::MatrixAssembler;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either convert or fail with an error, never panic
    let Ok(lines) = extract_consensus_lines(data) else {
        return;
    };
    let Ok(table) = ConsensusTable::from_lines(&lines, b'\t') else {
        return;
    };
    let Ok(samples) = sample_numbers(table.headers()) else {
        return;
    };

    if let Ok(matrix) = MatrixAssembler::default().assemble(&table, &samples, None) {
        let (rows, columns) = matrix.shape();
        assert_eq!(rows, table.row_count() + 2);
        assert!(matrix.rows().iter().all(|row| row.len() == columns));
        let mut sink = Vec::new();
        let _ = matrix.write_to(&mut sink, b'\t');
    }
});
