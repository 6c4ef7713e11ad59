use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_core::{extract_selected, AxisSelection, RowLimits};

fn gen_table(n: usize) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = vec!["Date".to_string(), "Price".to_string(), "Volume".to_string()];
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        // simple drifting price series
        let price = (i as f64 * 0.01).sin() * 10.0 + 100.0;
        rows.push(vec![
            format!("2024-01-{:02}", (i % 28) + 1),
            format!("{price:.4}"),
            format!("{}", i * 3),
        ]);
    }
    (headers, rows)
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for &n in &[10_000usize, 100_000usize] {
        let (headers, rows) = gen_table(n);
        let selection = AxisSelection::xy("Date", "Price");

        group.bench_with_input(BenchmarkId::new("uncapped", n), &n, |b, _| {
            b.iter(|| {
                let out =
                    extract_selected(&headers, &rows, &selection, &RowLimits::none()).unwrap();
                black_box(out.rows.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("capped_1000", n), &n, |b, _| {
            let limits = RowLimits::x(1_000);
            b.iter(|| {
                let out = extract_selected(&headers, &rows, &selection, &limits).unwrap();
                black_box(out.rows.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
