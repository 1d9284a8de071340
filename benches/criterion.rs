use std::fmt::Write;
use std::path::Path;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rebalance_lib::{parse_data, FileKind, ModConfig, Resolver};

/// Ritual data shaped like the real file, with `n` rituals.
fn ritual_data(n: usize) -> String {
    let mut data = String::new();
    for i in 0..n {
        let ritpow = i % 40;
        let _ = writeln!(data, "newritual \"Ritual {i}\"");
        let _ = writeln!(data, "descr \"Does something # with a hash in it\"");
        let _ = writeln!(data, "ritpow {ritpow} # Class {ritpow}");
        let _ = writeln!(data, "level {}", i % 10 + 1);
        for resource in 0..(i % 4 + 1) {
            let _ = writeln!(data, "cost {resource} {}  # comment", i % 200 + 1);
        }
        data.push('\n');
    }
    data
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for n in [100, 1000, 10_000] {
        let data = ritual_data(n);
        group.bench_with_input(BenchmarkId::new("rituals", n), &data, |b, data| {
            b.iter(|| parse_data(Path::new("bench.c5m"), FileKind::Data, data));
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let parsed = parse_data(Path::new("bench.c5m"), FileKind::Data, &ritual_data(1000));
    let config = ModConfig::from_json(
        Path::new("bench.json"),
        r#"{"default": 75, "ritpow_modifiers": {"3": 50, "12": 120}, "level_modifiers": {"5": 80}}"#,
    )
    .unwrap();
    let resolver = Resolver::new(&config, &parsed.ritpows);
    c.bench_function("tiered rituals", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            rebalance_lib::emit::write_tiered_rituals(&mut out, parsed.rituals(), &resolver)
                .unwrap();
            out
        });
    });
}

criterion_group!(benches, bench_parse, bench_generate);
criterion_main!(benches);
