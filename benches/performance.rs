//! Performance benchmarks for eslintrc-gen
//!
//! These benchmarks measure the key operations over the built-in catalog
//! and over synthetic catalogs of growing size:
//! - Parsing the embedded catalog
//! - Reconciliation
//! - Merging and document serialization
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench reconcile
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use eslintrc_gen::output::write_document;
use eslintrc_gen::{Catalog, Prefix, RuleSource, build_document, merge, validate_and_report};

/// Build `count` consistent sources with `rules` rules each
fn synthetic_sources(count: usize, rules: usize) -> Vec<RuleSource> {
    (0..count)
        .map(|i| {
            let names: Vec<String> = (0..rules).map(|r| format!("rule-{:05}", r)).collect();
            let mut source = RuleSource::new(
                format!("plugin-{}", i),
                Prefix::new(format!("plugin-{}", i)).unwrap(),
            )
            .with_from_js(names.iter().cloned());
            for name in names {
                source = source.with_rule(name, "warn");
            }
            source
        })
        .collect()
}

fn bench_load_builtin(c: &mut Criterion) {
    c.bench_function("load_builtin_catalog", |b| {
        b.iter(|| black_box(Catalog::builtin().unwrap()))
    });
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    let catalog = Catalog::builtin().unwrap();
    group.bench_function("builtin", |b| {
        b.iter(|| black_box(validate_and_report(black_box(catalog.sources()))))
    });

    for rules in [100, 1_000, 10_000] {
        let sources = synthetic_sources(4, rules);
        group.throughput(Throughput::Elements((4 * rules) as u64));
        group.bench_with_input(BenchmarkId::new("synthetic", rules), &sources, |b, sources| {
            b.iter(|| black_box(validate_and_report(sources)))
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let sources = synthetic_sources(4, 1_000);
    let selected: Vec<String> = sources.iter().map(|s| s.name().to_string()).collect();
    group.bench_function("synthetic_4x1000", |b| {
        b.iter(|| black_box(merge(&sources, &selected).unwrap()))
    });

    let catalog = Catalog::builtin().unwrap();
    let Some(profile) = catalog.profile("svelte") else {
        panic!("built-in svelte profile missing");
    };
    group.bench_function("svelte_document", |b| {
        b.iter(|| {
            let document = build_document(&catalog, profile).unwrap();
            let mut buf = Vec::with_capacity(32 * 1024);
            write_document(&mut buf, &document).unwrap();
            black_box(buf)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_load_builtin, bench_reconcile, bench_merge);
criterion_main!(benches);
