use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use openms_normalyzer::columns::sample_numbers;
use openms_normalyzer::consensus::{extract_consensus_lines, ConsensusTable};
use openms_normalyzer::matrix::MatrixAssembler;

/// Build a mixed-tag report with the given number of consensus rows and samples
fn create_report(num_rows: usize, num_samples: usize) -> String {
    let mut report = String::from("#MAP\tid\tfilename\n");
    for s in 0..num_samples {
        report.push_str(&format!("MAP\t{}\tsample_{}.featureXML\n", s, s));
    }

    report.push_str("#CONSENSUS\trt_cf\tmz_cf\tintensity_cf\tcharge_cf\twidth_cf\tquality_cf");
    for s in 0..num_samples {
        report.push_str(&format!("\trt_{s}\tmz_{s}\tintensity_{s}\tcharge_{s}\twidth_{s}"));
    }
    report.push('\n');

    for i in 0..num_rows {
        report.push_str(&format!(
            "CONSENSUS\t{:.2}\t{:.4}\t{}\t2\t0.5\t0.9",
            i as f64 * 0.5,
            400.0 + i as f64 * 0.01,
            1000 + i
        ));
        for s in 0..num_samples {
            if (i + s) % 7 == 0 {
                report.push_str("\t\t\t\t\t");
            } else {
                report.push_str(&format!("\t{:.2}\t{:.4}\t{}\t2\t0.5", i as f64 * 0.5, 400.0, 100 + s));
            }
        }
        report.push('\n');
        if i % 10 == 0 {
            report.push_str("PEPTIDE\t1.0\t400.0\t2\tPEPTIDEK\n");
        }
    }
    report
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for num_rows in [1_000, 10_000].iter() {
        let report = create_report(*num_rows, 12);
        group.throughput(Throughput::Bytes(report.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", num_rows), &report, |b, report| {
            b.iter(|| {
                let lines = extract_consensus_lines(black_box(report.as_bytes())).unwrap();
                ConsensusTable::from_lines(&lines, b'\t').unwrap()
            });
        });
    }

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");

    for num_samples in [4, 24, 96].iter() {
        let report = create_report(5_000, *num_samples);
        let lines = extract_consensus_lines(report.as_bytes()).unwrap();
        let table = ConsensusTable::from_lines(&lines, b'\t').unwrap();
        let samples = sample_numbers(table.headers()).unwrap();
        let assembler = MatrixAssembler::default();

        group.throughput(Throughput::Elements(table.row_count() as u64));
        group.bench_with_input(BenchmarkId::new("samples", num_samples), &table, |b, table| {
            b.iter(|| {
                let matrix = assembler.assemble(black_box(table), &samples, None).unwrap();
                let mut out = Vec::with_capacity(1 << 20);
                matrix.write_to(&mut out, b'\t').unwrap();
                out
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_assemble);
criterion_main!(benches);
