#![expect(missing_docs)]
//! Whole-document parsing with jsonpeg against `serde_json` on inputs inside
//! the shared subset: strings without escapes, unsigned integers, objects and
//! arrays.

use std::{fmt::Write, hint::black_box, time::Duration};

use criterion::{
    BenchmarkGroup, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
    measurement::WallTime,
};
use jsonpeg::Grammar;

/// `count` bundle objects in the shape of a plugin manifest.
fn manifest(count: usize) -> String {
    let mut out = String::from("{\n  \"version\": 17,\n  \"bundles\": [\n");
    for i in 0..count {
        if i > 0 {
            out.push_str(",\n");
        }
        write!(
            out,
            "    {{ \"name\": \"org.example.bundle{i}\", \"order\": {i}, \"tags\": [\"a\", \"b\"] }}"
        )
        .unwrap();
    }
    out.push_str("\n  ]\n}\n");
    out
}

/// An array nested `depth` levels deep.
fn nested(depth: usize) -> String {
    let mut out = "[".repeat(depth);
    out.push_str("\"leaf\"");
    out.push_str(&"]".repeat(depth));
    out
}

fn bench_input(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, input: &str) {
    let grammar = Grammar::json();
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_with_input(BenchmarkId::new("jsonpeg", name), input, |b, input| {
        b.iter(|| grammar.parse_document(black_box(input)).unwrap());
    });
    group.bench_with_input(BenchmarkId::new("serde_json", name), input, |b, input| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(input)).unwrap());
    });
}

fn parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");
    group.measurement_time(Duration::from_secs(5));

    for count in [4, 64, 1024] {
        bench_input(&mut group, &format!("manifest_{count}"), &manifest(count));
    }
    bench_input(&mut group, "nested_64", &nested(64));

    group.finish();
}

fn grammar_build(c: &mut Criterion) {
    c.bench_function("grammar_build", |b| b.iter(Grammar::json));
}

criterion_group!(benches, parse_document, grammar_build);
criterion_main!(benches);
