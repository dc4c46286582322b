//! Normalizer throughput benchmarks.
//!
//! Every date cell of a scraped table goes through the normalizer, and a
//! miss walks the whole pattern table before giving up, so the no-date case
//! is the one to watch.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `by_shape` | One value per granularity, matched early or late in the table |
//! | `no_match` | Texts that walk the full table without a hit |
//! | `table` | Compiling the pattern table at startup |
//! | `pipeline` | A lifecycle table of items through cleaner and formatter |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench normalization_bench
//! open target/criterion/report/index.html
//! ```

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use datesift::config::{Config, DateConfig};
use datesift::pipeline::{Item, ItemSchema, Pipeline};
use datesift::{DateNormalizer, FieldMeta, PatternTable};

// ---------------------------------------------------------------------------
// By shape
// ---------------------------------------------------------------------------

fn by_shape_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("by_shape");
    let n = DateNormalizer::new(&DateConfig::default()).unwrap();
    let meta = FieldMeta::date();

    let cases = [
        ("month_name_day_year", "Released March 5th, 2024"),
        ("day_month_year", "25.12.2024"),
        ("month_year", "End of support: Mar-2024"),
        ("quarter", "~Q2 of 2025"),
        ("year", "Supported until 2026"),
    ];

    group.throughput(Throughput::Elements(1));
    for (name, text) in cases {
        group.bench_with_input(BenchmarkId::new(name, text.len()), text, |b, text| {
            b.iter(|| n.normalize("end_of_support", &meta, black_box(text)))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// No match
// ---------------------------------------------------------------------------

fn no_match_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("no_match");
    let n = DateNormalizer::new(&DateConfig::default()).unwrap();
    let meta = FieldMeta::date();

    let short = "Not Available";
    let long = "Contact your account team for extended support options on this platform; \
                pricing and availability vary by region and contract tier.";

    group.throughput(Throughput::Elements(1));
    group.bench_with_input(BenchmarkId::new("short", short.len()), short, |b, text| {
        b.iter(|| n.normalize("eol", &meta, black_box(text)))
    });
    group.bench_with_input(BenchmarkId::new("long", long.len()), long, |b, text| {
        b.iter(|| n.normalize("eol", &meta, black_box(text)))
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Table build
// ---------------------------------------------------------------------------

fn table_bench(c: &mut Criterion) {
    c.bench_function("table/build_all", |b| b.iter(|| PatternTable::all().unwrap()));
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

fn pipeline_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = Pipeline::from_config(&Config::defaults()).unwrap();
    let schema = Arc::new(
        ItemSchema::new()
            .with_field("product", FieldMeta::default())
            .with_field("frsDate", FieldMeta::start())
            .with_field("eoSupport", FieldMeta::date())
            .with_field("eol", FieldMeta::end()),
    );
    let values = ["Sept 2019", "05-Mar-2024", "~Q2 of 2024", "Not Available", "2026"];

    for rows in [100usize, 1_000] {
        let items: Vec<Item> = (0..rows)
            .map(|i| {
                Item::new(Arc::clone(&schema))
                    .with("product", format!("Router {i}"))
                    .with("frsDate", values[i % values.len()])
                    .with("eoSupport", values[(i + 1) % values.len()])
                    .with("eol", values[(i + 2) % values.len()])
            })
            .collect();

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &items, |b, items| {
            b.iter(|| pipeline.process_all(items.clone()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    by_shape_bench,
    no_match_bench,
    table_bench,
    pipeline_bench
);
criterion_main!(benches);
