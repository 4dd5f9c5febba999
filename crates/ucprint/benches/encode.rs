//! Benchmark – `ucprint::encode`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ucprint::{encode, parse_hex};

/// Representative code points for each sequence width.
const WIDTHS: [(&str, u64); 4] = [
    ("1-byte", 0x41),
    ("2-byte", 0xE9),
    ("3-byte", 0x20AC),
    ("4-byte", 0x1_F600),
];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(1));

    for (name, cp) in WIDTHS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &cp, |b, &cp| {
            b.iter(|| encode(black_box(cp)));
        });
    }

    group.bench_function("invalid", |b| b.iter(|| encode(black_box(0xD800))));
    group.finish();
}

fn bench_parse_and_encode(c: &mut Criterion) {
    // Every scalar value in the Basic Multilingual Plane, rendered once up
    // front so only parsing and encoding are measured.
    let args: Vec<String> = (0u64..0x1_0000).map(|cp| format!("{cp:x}")).collect();

    let mut group = c.benchmark_group("parse_and_encode");
    group.throughput(Throughput::Elements(args.len() as u64));
    group.bench_function("bmp", |b| {
        b.iter(|| {
            let mut produced = 0usize;
            for arg in &args {
                if let Ok(encoded) = parse_hex(arg).map(encode) {
                    produced += encoded.map_or(0, |bytes| bytes.len());
                }
            }
            black_box(produced)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_parse_and_encode);
criterion_main!(benches);
