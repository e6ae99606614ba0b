//! Benchmarks for the analysis pipeline
//!
//! Covers the full run from expression text and the region search on its own,
//! across variable counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmap_logic::{find_regions, Analysis, KarnaughMap, SimplifyOptions, TruthTable, VariableList};

/// Expressions of increasing width with a mix of large and scattered regions
const CASES: &[(&str, &str)] = &[
    ("3_vars", "a and b or not c"),
    ("6_vars", "(a or b) and (c or not d) or e and not f"),
    ("10_vars", "a and b or c and d or e and f or g and h or i and not j"),
    ("14_vars", "a or b and c or d and e and f or g and h or i or j and k and l or m and not n"),
];

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let options = SimplifyOptions::default();

    for (name, input) in CASES {
        let rows = Analysis::from_expression(input, &options)
            .map(|a| a.table().len())
            .unwrap_or(0);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| Analysis::from_expression(black_box(input), &options).unwrap())
        });
    }

    group.finish();
}

fn bench_region_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions");

    for (name, input) in CASES {
        let expr = kmap_logic::BoolExpr::parse(input).unwrap();
        let vars = VariableList::from_expression(&expr).unwrap();
        let f = expr.bind(&vars).unwrap();
        let map = KarnaughMap::build(&TruthTable::generate(&f, &vars).unwrap());
        let plane = map.output_plane();

        group.throughput(Throughput::Elements(plane.rows() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &plane, |b, plane| {
            b.iter(|| find_regions(black_box(plane)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_pipeline, bench_region_search);
criterion_main!(benches);
