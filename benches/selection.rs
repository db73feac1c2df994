//! Benchmarks for streaming field selection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fieldcut::{Command, Config, Selector};

fn sample_input(size: usize) -> String {
    // Log-like lines with uneven spacing
    let lines = [
        "2024-01-01 12:00:00  INFO   server   request handled in 12ms\n",
        "2024-01-01 12:00:01  WARN   cache    miss\tkey=user:42\n",
        "2024-01-01 12:00:02  ERROR  db       connection reset by peer\n",
        "2024-01-01 12:00:03  DEBUG  server   keepalive\n",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(lines[i % lines.len()]);
        i += 1;
    }
    text
}

fn selector(args: &[&str]) -> Selector {
    match Config::from_args(args) {
        Ok(Command::Run(config)) => Selector::new(config),
        _ => unreachable!("benchmark arguments are valid"),
    }
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    let cases: [(&str, &[&str]); 3] = [
        ("whole_line", &[]),
        ("single_field", &["3"]),
        ("reordered", &["5:", "3", "1:2"]),
    ];

    for size in [1_000, 10_000, 100_000] {
        let input = sample_input(size);
        group.throughput(Throughput::Bytes(input.len() as u64));

        for (name, args) in cases {
            let selector = selector(args);
            group.bench_with_input(BenchmarkId::new(name, size), &input, |b, input| {
                b.iter(|| {
                    let mut out = Vec::with_capacity(input.len());
                    selector.run(black_box(input.as_bytes()), &mut out).unwrap();
                    out
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
